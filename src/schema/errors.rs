//! Schema error types
//!
//! Error codes:
//! - KARDEX_NOT_A_COLLECTION (top-level value is not an array)
//! - KARDEX_MALFORMED_RECORD (collection element is not an object)
//! - KARDEX_RECORD_VALIDATION_FAILED (field-level contract violation)
//!
//! A validation pass reports the first violation it encounters, with enough
//! detail to locate the offending record and field.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Top-level value is not an array
    NotACollection,
    /// Collection element is not an object
    MalformedRecord,
    /// Record violates a field contract
    RecordValidationFailed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::NotACollection => "KARDEX_NOT_A_COLLECTION",
            SchemaErrorCode::MalformedRecord => "KARDEX_MALFORMED_RECORD",
            SchemaErrorCode::RecordValidationFailed => "KARDEX_RECORD_VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Violation details: which record, which field, what was expected.
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    /// Index of the offending record in the collection
    pub record: usize,
    /// Field name
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        record: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            record,
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(record: usize, field: impl Into<String>) -> Self {
        Self::new(record, field, "field to be present", "missing")
    }

    pub fn type_mismatch(
        record: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(record, field, expected, actual)
    }

    pub fn list_too_short(
        record: usize,
        field: impl Into<String>,
        min_items: usize,
        len: usize,
    ) -> Self {
        Self::new(
            record,
            field,
            format!("at least {} elements", min_items),
            format!("{} elements", len),
        )
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}, field '{}': expected {}, got {}",
            self.record, self.field, self.expected, self.actual
        )
    }
}

/// Schema error with full context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Variant whose contract was violated
    variant: &'static str,
    /// Human-readable message
    message: String,
    /// Violation details if applicable
    details: Option<ValidationDetails>,
}

impl SchemaError {
    /// Top-level value is not an array
    pub fn not_a_collection(variant: &'static str, actual: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::NotACollection,
            variant,
            message: format!("expected an array of records, got {}", actual.into()),
            details: None,
        }
    }

    /// Collection element is not an object
    pub fn malformed_record(variant: &'static str, record: usize, actual: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::MalformedRecord,
            variant,
            message: format!("record {} is not an object, got {}", record, actual.into()),
            details: None,
        }
    }

    /// Record violates a field contract
    pub fn validation_failed(variant: &'static str, details: ValidationDetails) -> Self {
        Self {
            code: SchemaErrorCode::RecordValidationFailed,
            variant,
            message: details.to_string(),
            details: Some(details),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the variant whose contract was violated
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns violation details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.code.code(), self.variant, self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SchemaErrorCode::NotACollection.code(),
            "KARDEX_NOT_A_COLLECTION"
        );
        assert_eq!(
            SchemaErrorCode::MalformedRecord.code(),
            "KARDEX_MALFORMED_RECORD"
        );
        assert_eq!(
            SchemaErrorCode::RecordValidationFailed.code(),
            "KARDEX_RECORD_VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_validation_details_display() {
        let details = ValidationDetails::type_mismatch(2, "number", "number", "string");
        let display = format!("{}", details);
        assert!(display.contains("record 2"));
        assert!(display.contains("number"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_display_names_variant() {
        let err = SchemaError::validation_failed(
            "people",
            ValidationDetails::missing_field(0, "surname"),
        );
        let display = format!("{}", err);
        assert!(display.contains("people"));
        assert!(display.contains("surname"));
        assert!(display.contains("KARDEX_RECORD_VALIDATION_FAILED"));
    }
}
