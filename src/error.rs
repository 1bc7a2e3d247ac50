use std::io;

use thiserror::Error;

/// Library-wide error type for wrapcfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No config file found in the current directory.
    #[error("No wrap.config.json found. Run 'wrapcfg init' first.")]
    ConfigMissing,

    /// Config file already exists at the target location.
    #[error("wrap.config.json already exists")]
    ConfigExists,

    /// Application identifier is invalid.
    #[error("Invalid application id '{0}': must be a dot-delimited reverse-DNS identifier")]
    InvalidAppId(String),

    /// A config field failed validation.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn invalid_field<S: Into<String>>(field: &'static str, reason: S) -> Self {
        AppError::InvalidField { field, reason: reason.into() }
    }
}
