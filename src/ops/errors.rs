//! Operation error types

use thiserror::Error;

use crate::model::RecordError;

/// Result type for record operations
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors raised by record operations
#[derive(Debug, Error)]
pub enum OpsError {
    /// A record's date fields do not parse as a calendar date.
    ///
    /// Raised during the re-sort step of an add; the index identifies the
    /// offending record in pre-sort order. The add is aborted and nothing
    /// may be persisted.
    #[error("record {index}: {source}")]
    DateParse {
        /// Position of the offending record before sorting
        index: usize,
        #[source]
        source: RecordError,
    },
}
