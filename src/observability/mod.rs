//! Observability for kardex
//!
//! Structured JSON logging only; there are no metrics and no audit trail.

mod logger;

pub use logger::{Logger, Severity};
