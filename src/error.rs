//! Error types for kube-pass-auth

use thiserror::Error;

use crate::auth::AuthMode;

/// Result type alias for kube-pass-auth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit status for argument errors reported by the parser itself
pub const USAGE_EXIT_CODE: i32 = 9;

/// Errors that can occur while producing an exec credential
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing sub-command (expected 'pem' or 'token')")]
    MissingMode,

    #[error("Missing pass entry path")]
    MissingEntry,

    #[error("Unknown sub-command '{0}' (expected 'pem' or 'token')")]
    UnknownMode(String),

    #[error("Unable to read secret '{entry}': {reason}")]
    SecretUnreadable { entry: String, reason: String },

    #[error("Missing required fields for {mode} mode: {}", .keys.join(", "))]
    MissingFields {
        mode: AuthMode,
        keys: Vec<&'static str>,
    },

    #[error("Prerequisite not found: {0}")]
    Prerequisite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingMode => 2,
            Self::MissingEntry => 3,
            Self::SecretUnreadable { .. } => 4,
            Self::UnknownMode(_) => 5,
            Self::MissingFields { .. } => 6,
            Self::Prerequisite(_) => 7,
            Self::Config(_) => 8,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
