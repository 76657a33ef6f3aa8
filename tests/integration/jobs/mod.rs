//! Jobs endpoint integration tests (JOBS-01 through JOBS-08)

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use carverjobs_client::JobBoardApi;
use carverjobs_types::{JobFilter, NewJob};

use crate::common::{job_json, TestApp};

// JOBS-01: no filter means a bare /jobs request
#[tokio::test]
async fn test_get_jobs_without_filters() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [job_json("j-1", "Deckhand", "deck"), job_json("j-2", "Chef", "galley")],
            "total": 2,
            "page": 1,
            "limit": 20
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let response = app.client.get_jobs(&JobFilter::default()).await.unwrap();
    assert_eq!(response.total, 2);
    assert_eq!(response.limit, 20);
    assert_eq!(response.jobs[0].title, "Deckhand");
    assert_eq!(response.jobs[1].job_type.as_deref(), Some("galley"));

    let requests = app.server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

// JOBS-02: every filter field becomes a query parameter
#[tokio::test]
async fn test_get_jobs_sends_filters_as_query() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs")))
        .and(query_param("type", "deck"))
        .and(query_param("location", "Fort Lauderdale"))
        .and(query_param("company", "Blue Water"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [job_json("j-3", "Bosun", "deck")],
            "total": 11,
            "page": 3,
            "limit": 5
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let filter = JobFilter::new()
        .with_type("deck")
        .with_location("Fort Lauderdale")
        .with_company("Blue Water")
        .with_limit(5)
        .with_offset(10);
    let response = app.client.get_jobs(&filter).await.unwrap();
    assert_eq!(response.page, 3);
    assert_eq!(response.jobs.len(), 1);
}

// JOBS-03: empty strings and zeros are left out of the query
#[tokio::test]
async fn test_get_jobs_skips_empty_filters() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs")))
        .and(query_param("location", "Palma"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": [], "total": 0})))
        .expect(1)
        .mount(&app.server)
        .await;

    let filter = JobFilter {
        job_type: Some(String::new()),
        location: Some("Palma".to_string()),
        company: None,
        limit: Some(0),
        offset: Some(0),
    };
    app.client.get_jobs(&filter).await.unwrap();
}

// JOBS-04: missing envelope fields fall back to defaults
#[tokio::test]
async fn test_get_jobs_defaults_missing_fields() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": null,
            "page": 0
        })))
        .mount(&app.server)
        .await;

    let response = app.client.get_jobs(&JobFilter::default()).await.unwrap();
    assert!(response.jobs.is_empty());
    assert_eq!(response.total, 0);
    assert_eq!(response.page, 1);
    assert_eq!(response.limit, 10);
}

// JOBS-05: a 200 carrying only a message is reported as a server error
#[tokio::test]
async fn test_get_jobs_message_body_is_error() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Database connection is not available"})),
        )
        .mount(&app.server)
        .await;

    let err = app.client.get_jobs(&JobFilter::default()).await.unwrap_err();
    assert_eq!(err.status(), 500);
    assert_eq!(err.to_string(), "Database connection is not available");
    assert_eq!(
        err.data().unwrap()["message"],
        "Database connection is not available"
    );
}

// JOBS-06: fetch a single job
#[tokio::test]
async fn test_get_job_by_id() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs/j-7")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(job_json("j-7", "Second Engineer", "engine")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let job = app.client.get_job_by_id("j-7").await.unwrap();
    assert_eq!(job.id, "j-7");
    assert_eq!(job.title, "Second Engineer");
    assert_eq!(job.vessel.as_deref(), Some("M/Y Serenity 55m"));
    assert!(job.posted_at.is_some());
}

// JOBS-07: unknown job maps to 404
#[tokio::test]
async fn test_get_job_by_id_not_found() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(TestApp::api_path("/jobs/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "job not found"})))
        .mount(&app.server)
        .await;

    let err = app.client.get_job_by_id("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "job not found");
}

// JOBS-08: admin job creation is authenticated
#[tokio::test]
async fn test_create_job_as_admin() {
    let app = TestApp::logged_in("jwt-admin").await;
    Mock::given(method("POST"))
        .and(path(TestApp::api_path("/admin/jobs")))
        .and(header("authorization", "Bearer jwt-admin"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "job created successfully",
            "job": job_json("j-new", "Mate", "deck")
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut new_job = NewJob::new("Mate", "Blue Water Yachting", "bluewater");
    new_job.job_type = Some("deck".to_string());
    let created = app.client.create_job(&new_job).await.unwrap();
    assert_eq!(created.job.id, "j-new");

    let requests = app.server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["title"], "Mate");
    assert_eq!(sent["type"], "deck");
    assert!(sent.get("salary").is_none());
}
