//! Launcher-specific error types

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Failed to spawn application process: {message}")]
    SpawnFailed { message: String },

    #[error("Project directory is not usable: {path}")]
    InvalidProjectDir { path: PathBuf },

    #[error("Application did not become ready within {timeout:?}")]
    ReadinessTimeout { timeout: Duration },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(unix)]
    #[error("Signal delivery failed: {0}")]
    SignalError(#[from] nix::Error),
}

impl LauncherError {
    /// Spawn failure with a human-readable message
    pub fn spawn(message: impl Into<String>) -> Self {
        LauncherError::SpawnFailed {
            message: message.into(),
        }
    }

    /// Configuration failure naming the offending field or value
    pub fn config(field: impl Into<String>) -> Self {
        LauncherError::ConfigurationError {
            field: field.into(),
        }
    }
}

pub type LauncherResult<T> = Result<T, LauncherError>;
