//! Schema validation subsystem for kardex
//!
//! A collection decoded from disk is untrusted until it passes its variant's
//! structural contract.
//!
//! # Design Principles
//!
//! - Validation before typed deserialization
//! - Strict type checks, no coercion
//! - First violation reported, then stop
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::CollectionValidator;
