//! Store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading or saving a collection.
///
/// A missing file is not an error; `load` maps it to an empty collection
/// before any of these can arise.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read, or could not be written
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contents are not valid JSON
    #[error("invalid JSON in '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized for writing
    #[error("failed to encode collection for '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded JSON does not satisfy the variant schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
