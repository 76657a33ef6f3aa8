//! CarverJobs command-line front end
//!
//! Maps each subcommand onto one `JobBoardApi` call and renders the result
//! as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use carverjobs_client::{ApiConfig, JobBoardApi};
use carverjobs_types::{JobFilter, LoginRequest, NewJob, RegisterRequest, Validate};

#[derive(Debug, Parser)]
#[command(
    name = "carverjobs",
    version,
    about = "Browse CarverJobs listings",
    after_help = "With CARVERJOBS_PROVIDER=mock the API runs in-process with a demo account \
(demo@carverjobs.com / demo-password) and sample listings. Anything registered or \
created in mock mode is gone when the command exits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the API is reachable
    Health,
    /// Create an account
    Register(RegisterArgs),
    /// Log in and store the session token
    Login(LoginArgs),
    /// Forget the stored session token
    Logout,
    /// Show the logged-in user's profile
    Profile,
    /// List job openings
    Jobs(JobsArgs),
    /// Show a single job
    Job {
        id: String,
    },
    /// Publish a job listing (admin only)
    CreateJob(CreateJobArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "CARVERJOBS_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub country_of_origin: Option<String>,
    #[arg(long)]
    pub current_location: Option<String>,
}

impl From<RegisterArgs> for RegisterRequest {
    fn from(args: RegisterArgs) -> Self {
        let mut request =
            RegisterRequest::new(args.email, args.password, args.first_name, args.last_name);
        request.phone_number = args.phone_number;
        request.country_of_origin = args.country_of_origin;
        request.current_location = args.current_location;
        request
    }
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "CARVERJOBS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Default, Args)]
pub struct JobsArgs {
    /// Department, e.g. deck, engine, interior
    #[arg(long = "type")]
    pub job_type: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

impl From<JobsArgs> for JobFilter {
    fn from(args: JobsArgs) -> Self {
        JobFilter {
            job_type: args.job_type,
            location: args.location,
            company: args.company,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

#[derive(Debug, Args)]
pub struct CreateJobArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub company: String,
    #[arg(long, default_value = "manual")]
    pub source: String,
    #[arg(long = "type")]
    pub job_type: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub vessel: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub requirements: Option<String>,
    #[arg(long)]
    pub source_url: Option<String>,
}

impl From<CreateJobArgs> for NewJob {
    fn from(args: CreateJobArgs) -> Self {
        let mut job = NewJob::new(args.title, args.company, args.source);
        job.job_type = args.job_type;
        job.location = args.location;
        job.vessel = args.vessel;
        job.duration = args.duration;
        job.salary = args.salary;
        job.description = args.description;
        job.requirements = args.requirements;
        job.source_url = args.source_url;
        job
    }
}

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "carverjobs_cli=info,carverjobs_client=info";

/// Default location of the session token: `~/.carverjobs/auth_token`
pub fn default_token_file() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".carverjobs").join("auth_token"))
}

/// Load API config, keeping the session token on disk unless told otherwise
pub fn load_config() -> anyhow::Result<ApiConfig> {
    let mut config = ApiConfig::from_env().context("failed to load API configuration")?;
    if config.token_file.is_none() {
        config.token_file = default_token_file();
    }
    Ok(config)
}

/// Execute one subcommand and return its JSON rendering
pub async fn run(api: &dyn JobBoardApi, command: Command) -> anyhow::Result<Value> {
    let value = match command {
        Command::Health => serde_json::to_value(api.health_check().await?)?,
        Command::Register(args) => {
            let request = RegisterRequest::from(args);
            request.validate().context("invalid registration")?;
            serde_json::to_value(api.register(&request).await?)?
        }
        Command::Login(args) => {
            let credentials = LoginRequest::new(args.email, args.password);
            credentials.validate().context("invalid credentials")?;
            let response = api.login(&credentials).await?;
            tracing::info!(email = %response.user.email, "Session token stored");
            json!({ "user": response.user })
        }
        Command::Logout => {
            api.logout().await?;
            json!({ "message": "logged out" })
        }
        Command::Profile => serde_json::to_value(api.get_profile().await?)?,
        Command::Jobs(args) => serde_json::to_value(api.get_jobs(&args.into()).await?)?,
        Command::Job { id } => serde_json::to_value(api.get_job_by_id(&id).await?)?,
        Command::CreateJob(args) => {
            let job = NewJob::from(args);
            job.validate().context("invalid job")?;
            serde_json::to_value(api.create_job(&job).await?)?
        }
    };
    Ok(value)
}
