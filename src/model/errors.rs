//! Record error types

use thiserror::Error;

/// Result type for record construction and key derivation
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while building a record or deriving its sort key
#[derive(Debug, Error)]
pub enum RecordError {
    /// Birthday fields do not compose into a calendar date
    #[error("invalid calendar date '{value}', expected DD.MM.YYYY: {source}")]
    InvalidDate {
        /// The composed date text that failed to parse
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A required text field was blank
    #[error("field '{field}' must not be empty")]
    EmptyField {
        /// Name of the blank field
        field: &'static str,
    },
}
