// CarverJobs API - command-line client

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use carverjobs_cli::{load_config, run, Cli, DEFAULT_LOG_FILTER};
use carverjobs_client::{ApiError, JobBoardApiFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config().map_err(|e| {
        error!("Failed to load configuration: {:#}", e);
        e
    })?;

    info!(provider = %config.provider, base_url = %config.api_base_url, "Configuration loaded");

    let api = JobBoardApiFactory::create(config)?;

    match run(api.as_ref(), cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            match e.downcast_ref::<ApiError>() {
                Some(api_err) => match api_err.data() {
                    Some(body) => error!(status = api_err.status(), body = %body, "{}", api_err),
                    None => error!("{}", api_err),
                },
                None => error!("{:#}", e),
            }
            std::process::exit(1);
        }
    }
}
