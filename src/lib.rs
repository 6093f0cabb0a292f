//! kardex - a strict, schema-validated flat-file record manager
//!
//! One binary, two record registers (people and routes), one JSON file per
//! invocation. A collection is decoded, validated against its variant's
//! fixed schema, operated on in memory, and written back only when a
//! mutating operation reports that persistence is required.

pub mod cli;
pub mod model;
pub mod observability;
pub mod ops;
pub mod schema;
pub mod store;
