//! Mock Job Board API Implementation
//!
//! In-memory stand-in for the backend used by tests and offline runs:
//! - `MockJobBoardApi`: seeded users and jobs, call recording
//! - `MockCall`: one entry per trait method invocation
//!
//! Thread-safe via `Arc<RwLock<>>`.

use std::sync::{Arc, RwLock};

use chrono::Utc;

use carverjobs_types::{
    CreateJobResponse, HealthStatus, Job, JobFilter, JobResponse, LoginRequest, LoginResponse,
    NewJob, RegisterRequest, RegisterResponse, User,
};

use crate::{ApiError, JobBoardApi, MemoryTokenStore, TokenStore};

/// Page size applied when the filter limit is zero or above the cap
const MOCK_DEFAULT_LIMIT: u32 = 20;
const MOCK_MAX_LIMIT: u32 = 100;

/// Account seeded by [`MockJobBoardApi::demo`]
pub const DEMO_USER_ID: &str = "demo-user";
pub const DEMO_EMAIL: &str = "demo@carverjobs.com";
pub const DEMO_PASSWORD: &str = "demo-password";

/// A recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Register { email: String },
    Login { email: String },
    Logout,
    GetProfile,
    GetJobs(JobFilter),
    GetJobById(String),
    CreateJob { title: String },
    HealthCheck,
}

#[derive(Debug, Clone)]
struct MockAccount {
    user: User,
    password: String,
}

/// Mock job board that keeps everything in memory
#[derive(Clone)]
pub struct MockJobBoardApi {
    accounts: Arc<RwLock<Vec<MockAccount>>>,
    jobs: Arc<RwLock<Vec<Job>>>,
    calls: Arc<RwLock<Vec<MockCall>>>,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for MockJobBoardApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockJobBoardApi")
            .field("calls", &self.recorded_calls().len())
            .finish()
    }
}

impl Default for MockJobBoardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockJobBoardApi {
    pub fn new() -> Self {
        Self::with_token_store(Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_token_store(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
            jobs: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            tokens,
        }
    }

    /// Mock pre-loaded with a demo account and a handful of listings.
    ///
    /// Only the seed survives between processes. The demo account has a
    /// fixed id, so a token persisted by one run's `login` is still
    /// accepted by the next. Accounts and jobs created at runtime are lost
    /// when the process exits.
    pub fn demo(tokens: Arc<dyn TokenStore>) -> Self {
        let mut user = User::new(DEMO_USER_ID, DEMO_EMAIL, "Demo", "Crew", "user");
        user.current_location = Some("Palma de Mallorca".to_string());

        let seeded_at = Utc::now();
        let listing = |id: &str, title: &str, company: &str, job_type: &str, location: &str| {
            let mut job = NewJob::new(title, company, "demo");
            job.job_type = Some(job_type.to_string());
            job.location = Some(location.to_string());
            job.into_job(id, seeded_at)
        };

        Self::with_token_store(tokens)
            .with_user(user, DEMO_PASSWORD)
            .with_jobs(vec![
                listing("demo-job-1", "Deckhand", "Blue Water Yachting", "deck", "Palma"),
                listing("demo-job-2", "Chief Stewardess", "Azure Crew", "interior", "Antibes"),
                listing("demo-job-3", "2nd Engineer", "Engine Room Ltd", "engine", "Fort Lauderdale"),
                listing("demo-job-4", "Sous Chef", "Galley Crew", "galley", "Monaco"),
            ])
    }

    /// Seed listings returned by `get_jobs` and `get_job_by_id`
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        self.jobs
            .write()
            .expect("jobs lock poisoned")
            .extend(jobs);
        self
    }

    /// Seed an account that can log in with `password`
    pub fn with_user(self, user: User, password: impl Into<String>) -> Self {
        self.accounts
            .write()
            .expect("accounts lock poisoned")
            .push(MockAccount {
                user,
                password: password.into(),
            });
        self
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Return all recorded calls in order
    pub fn recorded_calls(&self) -> Vec<MockCall> {
        self.calls.read().expect("calls lock poisoned").clone()
    }

    /// Clear recorded calls
    pub fn reset(&self) {
        self.calls.write().expect("calls lock poisoned").clear();
    }

    fn record(&self, call: MockCall) -> Result<(), ApiError> {
        tracing::debug!(call = ?call, "Mock API: recording call");
        self.calls
            .write()
            .map_err(|e| ApiError::Unexpected(format!("calls lock poisoned: {e}")))?
            .push(call);
        Ok(())
    }

    /// User owning the stored token, or a 401
    fn authenticated_user(&self) -> Result<User, ApiError> {
        let token = self.tokens.get_token()?.ok_or_else(unauthorized)?;
        let user_id = token
            .strip_prefix("mock-token-")
            .ok_or_else(unauthorized)?
            .to_string();
        self.accounts
            .read()
            .map_err(|e| ApiError::Unexpected(format!("accounts lock poisoned: {e}")))?
            .iter()
            .find(|a| a.user.id == user_id)
            .map(|a| a.user.clone())
            .ok_or_else(unauthorized)
    }
}

fn status_error(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.to_string(),
        data: serde_json::json!({ "message": message }),
    }
}

fn unauthorized() -> ApiError {
    status_error(401, "missing or invalid token")
}

fn contains_ignore_case(field: Option<&str>, needle: Option<&str>) -> bool {
    match needle.filter(|n| !n.is_empty()) {
        None => true,
        Some(needle) => field.is_some_and(|f| f.to_lowercase().contains(&needle.to_lowercase())),
    }
}

#[async_trait::async_trait]
impl JobBoardApi for MockJobBoardApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.record(MockCall::Register {
            email: request.email.clone(),
        })?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| ApiError::Unexpected(format!("accounts lock poisoned: {e}")))?;
        if accounts.iter().any(|a| a.user.email == request.email) {
            return Err(status_error(
                409,
                &format!("user with email {} already exists", request.email),
            ));
        }

        let mut user = User::new(
            format!("user-{}", accounts.len() + 1),
            request.email.clone(),
            request.first_name.clone(),
            request.last_name.clone(),
            "user",
        );
        user.phone_number = request.phone_number.clone();
        user.country_of_origin = request.country_of_origin.clone();
        user.current_location = request.current_location.clone();

        accounts.push(MockAccount {
            user: user.clone(),
            password: request.password.clone(),
        });

        Ok(RegisterResponse {
            message: "user created successfully".to_string(),
            user,
        })
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(MockCall::Login {
            email: credentials.email.clone(),
        })?;

        let user = self
            .accounts
            .read()
            .map_err(|e| ApiError::Unexpected(format!("accounts lock poisoned: {e}")))?
            .iter()
            .find(|a| a.user.email == credentials.email && a.password == credentials.password)
            .map(|a| a.user.clone())
            .ok_or_else(|| status_error(401, "invalid credentials"))?;

        let token = format!("mock-token-{}", user.id);
        self.tokens.set_token(&token)?;
        Ok(LoginResponse { token, user })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(MockCall::Logout)?;
        self.tokens.clear_token()
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        self.record(MockCall::GetProfile)?;
        self.authenticated_user()
    }

    async fn get_jobs(&self, filter: &JobFilter) -> Result<JobResponse, ApiError> {
        self.record(MockCall::GetJobs(filter.clone()))?;

        let limit = match filter.limit.unwrap_or(0) {
            0 => MOCK_DEFAULT_LIMIT,
            l if l > MOCK_MAX_LIMIT => MOCK_DEFAULT_LIMIT,
            l => l,
        };
        let offset = filter.offset.unwrap_or(0);

        let jobs = self
            .jobs
            .read()
            .map_err(|e| ApiError::Unexpected(format!("jobs lock poisoned: {e}")))?;
        let matching: Vec<&Job> = jobs
            .iter()
            .filter(|job| {
                contains_ignore_case(job.job_type.as_deref(), filter.job_type.as_deref())
                    && contains_ignore_case(job.location.as_deref(), filter.location.as_deref())
                    && contains_ignore_case(Some(job.company.as_str()), filter.company.as_deref())
            })
            .collect();

        Ok(JobResponse {
            total: matching.len() as u64,
            jobs: matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect(),
            page: offset / limit + 1,
            limit,
        })
    }

    async fn get_job_by_id(&self, id: &str) -> Result<Job, ApiError> {
        self.record(MockCall::GetJobById(id.to_string()))?;
        self.jobs
            .read()
            .map_err(|e| ApiError::Unexpected(format!("jobs lock poisoned: {e}")))?
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| status_error(404, "job not found"))
    }

    async fn create_job(&self, job: &NewJob) -> Result<CreateJobResponse, ApiError> {
        self.record(MockCall::CreateJob {
            title: job.title.clone(),
        })?;
        self.authenticated_user()?;

        let mut jobs = self
            .jobs
            .write()
            .map_err(|e| ApiError::Unexpected(format!("jobs lock poisoned: {e}")))?;
        let created = job
            .clone()
            .into_job(format!("job-{}", jobs.len() + 1), Utc::now());
        jobs.push(created.clone());

        Ok(CreateJobResponse {
            message: "job created successfully".to_string(),
            job: created,
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.record(MockCall::HealthCheck)?;
        Ok(HealthStatus::new("healthy"))
    }
}
