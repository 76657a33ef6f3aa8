//! Health probe response

use serde::{Deserialize, Serialize};

/// Body of `GET /health`, e.g. `{"status": "healthy", "time": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Any other fields the server reports
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HealthStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            time: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok" | "OK")
    }
}
