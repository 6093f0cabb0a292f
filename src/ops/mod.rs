//! Record operations for kardex
//!
//! # Contracts
//!
//! - `add` appends, restores the variant's ordering, and reports whether
//!   persistence is required
//! - `sort_by_date` is stable and parses every key before reordering
//! - `select_by_field` preserves relative order and never errors on a miss

mod add;
mod errors;
mod select;

pub use add::{add, sort_by_date, Persistence};
pub use errors::{OpsError, OpsResult};
pub use select::FieldSelector;
