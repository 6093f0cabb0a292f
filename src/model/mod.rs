//! Typed records and the closed variant set
//!
//! Values cross from untrusted JSON into these types only after the
//! schema validator passes; record types never re-check structure.

mod errors;
mod person;
mod route;
mod variant;

pub use errors::{RecordError, RecordResult};
pub use person::Person;
pub use route::Route;
pub use variant::{LoadPolicy, Variant};
