//! HTTP implementation of the job board API
//!
//! Every endpoint goes through [`ApiClient::request`], which prefixes the
//! configured base URL, attaches the stored bearer token and interprets the
//! response.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use carverjobs_types::{
    CreateJobResponse, HealthStatus, Job, JobFilter, JobResponse, LoginRequest, LoginResponse,
    NewJob, PartialJobResponse, RegisterRequest, RegisterResponse, User,
};

use crate::request::{self, RequestOptions};
use crate::{ApiConfig, ApiError, JobBoardApi, TokenStore};

/// HTTP client for the job board REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    health_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client using the token store named by the configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let tokens = config.token_store();
        Self::with_token_store(config, tokens)
    }

    /// Create a client around an existing token store
    pub fn with_token_store(
        config: ApiConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            health_url: config.health_url,
            tokens,
        })
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request against `{base_url}{endpoint}`.
    ///
    /// Returns the parsed body of a 2xx response. Non-2xx responses become
    /// [`ApiError::Status`]; transport failures become [`ApiError::Network`].
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let token = self.tokens.get_token()?;
        let headers = request::merge_headers(
            request::default_headers(token.as_deref())?,
            &options.headers,
        );

        tracing::debug!(method = %options.method, url = %url, "Sending API request");

        let mut builder = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Unexpected(format!("failed to encode request body: {e}")))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(request::transport_error)?;
        request::read_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let data = self.request(endpoint, RequestOptions::get()).await?;
        decode(data)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Unexpected(format!("failed to encode request body: {e}")))?;
        let data = self.request(endpoint, RequestOptions::post(body)).await?;
        decode(data)
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::Unexpected(format!("unexpected response shape: {e}")))
}

/// Coerce a listing body into a [`JobResponse`].
///
/// A body that carries a `message` but no `jobs` is treated as a server
/// failure even when it arrived with a 2xx status.
pub fn normalize_job_response(data: Value) -> Result<JobResponse, ApiError> {
    if let Value::Object(map) = &data {
        if map.contains_key("message") && !map.contains_key("jobs") {
            let message = match &map["message"] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(ApiError::Status {
                status: 500,
                message,
                data,
            });
        }
    }

    let partial = if data.is_object() {
        decode::<PartialJobResponse>(data)?
    } else {
        PartialJobResponse::default()
    };
    Ok(partial.normalize())
}

#[async_trait::async_trait]
impl JobBoardApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post("/auth/login", credentials).await?;
        self.tokens.set_token(&response.token)?;
        tracing::info!(user_id = %response.user.id, "Logged in");
        Ok(response)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.tokens.clear_token()
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        self.get("/auth/profile").await
    }

    async fn get_jobs(&self, filter: &JobFilter) -> Result<JobResponse, ApiError> {
        let endpoint = request::jobs_endpoint(filter);
        let data = self.request(&endpoint, RequestOptions::get()).await?;
        let response = normalize_job_response(data)?;
        tracing::debug!(count = response.jobs.len(), total = response.total, "Fetched jobs");
        Ok(response)
    }

    async fn get_job_by_id(&self, id: &str) -> Result<Job, ApiError> {
        self.get(&format!("/jobs/{id}")).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<CreateJobResponse, ApiError> {
        self.post("/admin/jobs", job).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        tracing::debug!(url = %self.health_url, "Checking API health");
        let response = self
            .http
            .get(&self.health_url)
            .send()
            .await
            .map_err(request::transport_error)?;
        // The probe body is reported whatever the status, so a 503 still
        // yields the server's own view of its health.
        let data: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Unexpected(format!("invalid health response: {e}")))?;
        decode(data)
    }
}
