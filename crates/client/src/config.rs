//! API client configuration
//!
//! Loaded from environment variables (a `.env` file is honoured).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::ApiError;

pub const DEFAULT_API_BASE_URL: &str = "https://carverjobs-mono-production.up.railway.app/api/v1";
pub const DEFAULT_HEALTH_URL: &str = "https://carverjobs-mono-production.up.railway.app/health";

const SUPPORTED_PROVIDERS: [&str; 2] = ["http", "mock"];

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Client provider (http, mock)
    pub provider: String,
    /// Prefix for every endpoint path, e.g. `https://host/api/v1`
    pub api_base_url: String,
    /// Full URL of the health probe
    pub health_url: String,
    /// File holding the bearer token; tokens live in memory when unset
    pub token_file: Option<PathBuf>,
    /// Whole-request timeout, none when unset
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider: "http".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
            token_file: None,
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Create API config from environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = var("CARVERJOBS_PROVIDER").unwrap_or_else(|| "http".to_string());
        if !SUPPORTED_PROVIDERS.contains(&provider.as_str()) {
            return Err(ApiError::Configuration(format!(
                "Unknown API provider: {}. Supported providers: http, mock",
                provider
            )));
        }

        let api_base_url = var("CARVERJOBS_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let health_url =
            var("CARVERJOBS_HEALTH_URL").unwrap_or_else(|| DEFAULT_HEALTH_URL.to_string());
        let token_file = var("CARVERJOBS_TOKEN_FILE").map(PathBuf::from);

        let timeout = match var("CARVERJOBS_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ApiError::Configuration(format!(
                        "CARVERJOBS_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            provider,
            api_base_url,
            health_url,
            token_file,
            timeout,
        })
    }

    /// Token store backing this configuration
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        match &self.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::new()),
        }
    }
}
