//! Common test utilities and fixtures for integration tests
//!
//! - A wiremock server standing in for the backend, mounted at `/api/v1`
//! - An `ApiClient` pointed at it with an inspectable token store
//! - Backend-shaped JSON fixtures for users and jobs

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use carverjobs_client::{ApiClient, ApiConfig, FileTokenStore, MemoryTokenStore, TokenStore};

pub const API_PREFIX: &str = "/api/v1";

/// Mock backend plus a client wired to it
pub struct TestApp {
    pub server: MockServer,
    pub client: ApiClient,
    pub tokens: Arc<dyn TokenStore>,
}

impl TestApp {
    /// Client with an empty in-memory token store
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryTokenStore::new())).await
    }

    /// Client that already holds `token`
    pub async fn logged_in(token: &str) -> Self {
        Self::with_store(Arc::new(MemoryTokenStore::with_token(token))).await
    }

    /// Client persisting its token to `path`
    pub async fn with_token_file(path: &std::path::Path) -> Self {
        Self::with_store(Arc::new(FileTokenStore::new(path))).await
    }

    pub async fn with_store(tokens: Arc<dyn TokenStore>) -> Self {
        let server = MockServer::start().await;
        let config = ApiConfig {
            api_base_url: format!("{}{}", server.uri(), API_PREFIX),
            health_url: format!("{}/health", server.uri()),
            ..ApiConfig::default()
        };
        let client = ApiClient::with_token_store(config, tokens.clone())
            .expect("client should build for a local mock server");
        Self {
            server,
            client,
            tokens,
        }
    }

    /// Full mock path for an API endpoint
    pub fn api_path(endpoint: &str) -> String {
        format!("{API_PREFIX}{endpoint}")
    }

    pub fn stored_token(&self) -> Option<String> {
        self.tokens.get_token().expect("token store readable")
    }
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "first_name": "Marta",
        "last_name": "Kowalski",
        "role": "user",
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z",
        "current_location": "Palma de Mallorca",
        "profile_completed": false
    })
}

pub fn job_json(id: &str, title: &str, job_type: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": "Blue Water Yachting",
        "location": "Antibes",
        "type": job_type,
        "vessel": "M/Y Serenity 55m",
        "duration": "Seasonal",
        "salary": "EUR 3,000/month",
        "description": "Mediterranean season",
        "requirements": "STCW, ENG1",
        "source_url": format!("https://jobs.example.com/{id}"),
        "source": "bluewater",
        "posted_at": "2024-04-10T12:00:00Z",
        "scraped_at": "2024-04-11T06:00:00Z",
        "created_at": "2024-04-11T06:00:05Z",
        "updated_at": "2024-04-11T06:00:05Z"
    })
}
