//! Error types for taskflow
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (validation failure, unknown task id, bad args)
//! - 4: Operation failed (persistence or serialization fault)

use thiserror::Error;

/// Exit codes for the taskflow CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskflow operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Failed to persist tasks: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::Validation(_)
            | Error::NotFound(_)
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            // Operation failures
            Error::Persistence(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskflow operations
pub type Result<T> = std::result::Result<T, Error>;
