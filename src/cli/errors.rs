//! CLI-specific error types
//!
//! Every failure a command handler can hit is wrapped here so `main` has a
//! single error surface to print before exiting non-zero.

use std::fmt;
use std::io;

use crate::model::RecordError;
use crate::ops::OpsError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Loading or saving the collection failed
    StoreError,
    /// Building a record from arguments failed
    RecordError,
    /// A record operation failed
    OperationError,
    /// I/O error (stdout)
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreError => "KARDEX_CLI_STORE_ERROR",
            Self::RecordError => "KARDEX_CLI_RECORD_ERROR",
            Self::OperationError => "KARDEX_CLI_OPERATION_ERROR",
            Self::IoError => "KARDEX_CLI_IO_ERROR",
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

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
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

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

impl From<RecordError> for CliError {
    fn from(e: RecordError) -> Self {
        Self::new(CliErrorCode::RecordError, e.to_string())
    }
}

impl From<OpsError> for CliError {
    fn from(e: OpsError) -> Self {
        Self::new(CliErrorCode::OperationError, e.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
