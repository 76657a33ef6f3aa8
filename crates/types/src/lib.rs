//! Shared data-transfer types for the CarverJobs API
//!
//! These types describe the payloads exchanged with the job-listing backend:
//! - Users, registration and login payloads
//! - Job listings, filters and the paginated listing envelope
//! - Error bodies and the health probe response
//!
//! The backend speaks snake_case JSON. Every type serializes snake_case and
//! also accepts the camelCase spelling of each field on input.

pub mod error;
pub mod health;
pub mod job;
pub mod user;

pub use error::ApiErrorBody;
pub use health::HealthStatus;
pub use job::{
    CreateJobResponse, Job, JobFilter, JobResponse, NewJob, PartialJobResponse, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};

// Re-exported so callers can name validation errors without a direct dependency.
pub use validator::{Validate, ValidationErrors};
