//! Health probe integration tests (HEALTH-01 through HEALTH-02)

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use carverjobs_client::{ApiError, JobBoardApi};

use crate::common::TestApp;

// HEALTH-01: the probe lives outside the /api/v1 prefix and sends no token
#[tokio::test]
async fn test_health_check_outside_api_prefix() {
    let app = TestApp::logged_in("jwt-any").await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "time": "2024-06-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let health = app.client.health_check().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.time.as_deref(), Some("2024-06-01T12:00:00Z"));

    let requests = app.server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

// HEALTH-02: a non-JSON probe body is an unexpected error
#[tokio::test]
async fn test_health_check_non_json() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&app.server)
        .await;

    let err = app.client.health_check().await.unwrap_err();
    assert!(matches!(err, ApiError::Unexpected(_)));
}
