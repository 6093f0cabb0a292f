//! The closed set of record variants
//!
//! Every collection holds records of exactly one variant. The `Variant`
//! trait is the seam between the generic engine (store, ops) and the two
//! concrete record types: it binds a record type to its name, its
//! structural contract, its load policy, and its optional chronological
//! sort key.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::RecordResult;
use crate::schema::Schema;

/// How a failed load is handled for a variant.
///
/// The two registers disagree on this point and both behaviors are kept,
/// named:
/// - `Strict`: any decode or validation failure aborts the command.
/// - `Lenient`: the failure is reported and the command continues with an
///   empty collection.
///
/// A missing file is an empty collection under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Load failure aborts the command
    Strict,
    /// Load failure is reported; the command continues with an empty collection
    Lenient,
}

/// A record variant: one member of the closed set the engine supports.
pub trait Variant: Serialize + DeserializeOwned + Clone {
    /// Variant name used in schemas and diagnostics
    const NAME: &'static str;

    /// How a failed load is handled for this variant
    const LOAD_POLICY: LoadPolicy;

    /// The structural contract a decoded collection must satisfy
    fn schema() -> Schema;

    /// Chronological key for variants re-sorted after every add.
    ///
    /// `None` marks a variant that keeps insertion order. For keyed
    /// variants the result is an error when the record's date fields do
    /// not compose into a valid calendar date; the caller must propagate
    /// it rather than skip the record.
    fn sort_key(&self) -> Option<RecordResult<NaiveDate>>;
}
