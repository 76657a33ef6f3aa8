//! Bearer token storage
//!
//! The token handed out by `POST /auth/login` is kept here between calls.
//! The request helper reads it before every request.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::ApiError;

/// Storage for the bearer token
pub trait TokenStore: Send + Sync {
    /// Current token, `None` when logged out
    fn get_token(&self) -> Result<Option<String>, ApiError>;

    fn set_token(&self, token: &str) -> Result<(), ApiError>;

    fn clear_token(&self) -> Result<(), ApiError>;
}

/// In-process token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already holding a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Result<Option<String>, ApiError> {
        let token = self
            .token
            .read()
            .map_err(|e| ApiError::Storage(format!("token lock poisoned: {e}")))?;
        Ok(token.clone())
    }

    fn set_token(&self, token: &str) -> Result<(), ApiError> {
        *self
            .token
            .write()
            .map_err(|e| ApiError::Storage(format!("token lock poisoned: {e}")))? =
            Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), ApiError> {
        *self
            .token
            .write()
            .map_err(|e| ApiError::Storage(format!("token lock poisoned: {e}")))? = None;
        Ok(())
    }
}

/// Token kept in a single file.
///
/// A missing file, or one holding only whitespace, means no token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Result<Option<String>, ApiError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApiError::Storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn set_token(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let write_err = |e: std::io::Error| {
            ApiError::Storage(format!("failed to write {}: {e}", self.path.display()))
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(write_err)?;

        // `mode` only applies on creation, so tighten a pre-existing file too
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }
        file.write_all(token.as_bytes()).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), "Stored auth token");
        Ok(())
    }

    fn clear_token(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
