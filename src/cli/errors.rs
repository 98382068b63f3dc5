//! CLI-specific error types

use std::fmt;
use std::io;

use super::seed::SeedError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Seed file could not be loaded
    SeedError,
    /// Request line is not a valid request
    BadRequest,
    /// The store failed verification
    StoreCorrupt,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "GLOSS_CLI_CONFIG_ERROR",
            Self::IoError => "GLOSS_CLI_IO_ERROR",
            Self::SeedError => "GLOSS_CLI_SEED_ERROR",
            Self::BadRequest => "GLOSS_CLI_BAD_REQUEST",
            Self::StoreCorrupt => "GLOSS_CLI_STORE_CORRUPT",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BadRequest, msg)
    }

    /// Store failed verification
    pub fn store_corrupt(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::StoreCorrupt, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SeedError> for CliError {
    fn from(e: SeedError) -> Self {
        Self::new(CliErrorCode::SeedError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
