//! Error types for the agent-scaffold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Invalid enumeration values are not errors: they surface as
//! [`crate::validate::ValidationWarning`]s and are coerced to defaults.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for agent-scaffold operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Required input was missing or unusable (empty name, unsafe name, ...).
    #[error("{0}")]
    UserError(String),

    /// A filesystem operation failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the console failed during an interactive session.
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    /// The YAML header could not be produced or parsed.
    #[error("agent header: {0}")]
    Header(String),

    /// The `--json` dump could not be produced.
    #[error("failed to serialize agent configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error with the operation and path it concerns.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserError(_)
            | ScaffoldError::Io { .. }
            | ScaffoldError::Console(_)
            | ScaffoldError::Header(_)
            | ScaffoldError::Json(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for agent-scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
