//! CarverJobs API Client
//!
//! Provides access to the CarverJobs job-listing backend with support for:
//! - HTTP client against the REST API for production
//! - Recording mock for testing and offline development
//! - Bearer token storage in memory or on disk
//! - Configurable base URL, health URL and timeout

pub mod client;
pub mod config;
pub mod mock;
pub mod request;
pub mod token;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use mock::{MockCall, MockJobBoardApi, DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
pub use request::RequestOptions;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};

use carverjobs_types::{
    CreateJobResponse, HealthStatus, Job, JobFilter, JobResponse, LoginRequest, LoginResponse,
    NewJob, RegisterRequest, RegisterResponse, User,
};
use thiserror::Error;

/// Message reported for any transport-level failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        data: serde_json::Value,
    },

    /// The request never got a response (connection, DNS, TLS, timeout)
    #[error("Network error - please check your connection")]
    Network(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("API configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// HTTP status of the failure, 0 when no status was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            ApiError::Network(_)
            | ApiError::Unexpected(_)
            | ApiError::Storage(_)
            | ApiError::Configuration(_) => 0,
        }
    }

    /// Parsed response body of a status failure
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Status { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

/// Operations offered by the job-listing backend.
///
/// Each method maps to exactly one HTTP request (except `logout`, which only
/// touches token storage). Failures are returned as-is, never retried.
#[async_trait::async_trait]
pub trait JobBoardApi: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// `POST /auth/login`. Stores the returned token on success.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Forget the stored token.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /auth/profile`
    async fn get_profile(&self) -> Result<User, ApiError>;

    /// `GET /jobs` with the filter encoded as query parameters.
    async fn get_jobs(&self, filter: &JobFilter) -> Result<JobResponse, ApiError>;

    /// `GET /jobs/{id}`
    async fn get_job_by_id(&self, id: &str) -> Result<Job, ApiError>;

    /// `POST /admin/jobs`
    async fn create_job(&self, job: &NewJob) -> Result<CreateJobResponse, ApiError>;

    /// `GET /health`, outside the versioned API prefix.
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;
}

/// Factory for creating JobBoardApi implementations
pub struct JobBoardApiFactory;

impl JobBoardApiFactory {
    /// Create a JobBoardApi based on configuration.
    pub fn create(config: ApiConfig) -> Result<Box<dyn JobBoardApi>, ApiError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!(base_url = %config.api_base_url, "Creating HTTP API client");
                Ok(Box::new(ApiClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock API client with demo data");
                Ok(Box::new(MockJobBoardApi::demo(config.token_store())))
            }
            provider => Err(ApiError::Configuration(format!(
                "Unknown API provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
