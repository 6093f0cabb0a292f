//! Collection validator for freshly decoded JSON
//!
//! Validation semantics:
//! - The top-level value must be an array
//! - Every element must be an object
//! - Every declared field that is present must have exactly the declared type
//! - Every required field must be present
//! - No implicit coercion: strings are never parsed as numbers, numbers are
//!   never accepted for string fields
//! - Undeclared fields are not checked; the contract covers declared fields
//!
//! A pass reports the first violation encountered and stops. A clean pass
//! means zero violations existed, not that at most one did.

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{FieldType, Schema};

/// Validates a decoded collection against a variant schema.
///
/// The validator runs between generic JSON decoding and typed
/// deserialization; values it rejects never reach the record types.
/// It does not mutate its input and is deterministic.
pub struct CollectionValidator;

impl CollectionValidator {
    /// Validates a collection value against a schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` describing the first violation:
    /// - Top-level value not an array (KARDEX_NOT_A_COLLECTION)
    /// - Element not an object (KARDEX_MALFORMED_RECORD)
    /// - Field contract violation (KARDEX_RECORD_VALIDATION_FAILED)
    pub fn validate(schema: &Schema, collection: &Value) -> SchemaResult<()> {
        let records = collection.as_array().ok_or_else(|| {
            SchemaError::not_a_collection(schema.variant, json_type_name(collection))
        })?;

        for (index, record) in records.iter().enumerate() {
            Self::validate_record(schema, index, record)?;
        }

        Ok(())
    }

    /// Boolean convenience for callers that only need the signal.
    pub fn is_valid(schema: &Schema, collection: &Value) -> bool {
        Self::validate(schema, collection).is_ok()
    }

    /// Validates one record object against the schema's field contracts.
    fn validate_record(schema: &Schema, index: usize, record: &Value) -> SchemaResult<()> {
        let obj = record.as_object().ok_or_else(|| {
            SchemaError::malformed_record(schema.variant, index, json_type_name(record))
        })?;

        for (field_name, field_def) in &schema.fields {
            match obj.get(*field_name) {
                Some(value) => {
                    Self::validate_value(schema, index, field_name, value, &field_def.field_type)?;
                }
                None => {
                    if field_def.required {
                        return Err(SchemaError::validation_failed(
                            schema.variant,
                            ValidationDetails::missing_field(index, *field_name),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates a present value against its declared type.
    fn validate_value(
        schema: &Schema,
        index: usize,
        field: &str,
        value: &Value,
        expected: &FieldType,
    ) -> SchemaResult<()> {
        match expected {
            FieldType::String => {
                if !value.is_string() {
                    return Err(type_error(schema, index, field, expected, value));
                }
            }
            FieldType::Number => {
                if !value.is_number() {
                    return Err(type_error(schema, index, field, expected, value));
                }
            }
            FieldType::StringList { min_items } => {
                let items = value
                    .as_array()
                    .ok_or_else(|| type_error(schema, index, field, expected, value))?;

                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        return Err(SchemaError::validation_failed(
                            schema.variant,
                            ValidationDetails::type_mismatch(
                                index,
                                format!("{}[{}]", field, i),
                                "string",
                                json_type_name(item),
                            ),
                        ));
                    }
                }

                if items.len() < *min_items {
                    return Err(SchemaError::validation_failed(
                        schema.variant,
                        ValidationDetails::list_too_short(index, field, *min_items, items.len()),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a type mismatch error.
fn type_error(
    schema: &Schema,
    index: usize,
    field: &str,
    expected: &FieldType,
    actual: &Value,
) -> SchemaError {
    SchemaError::validation_failed(
        schema.variant,
        ValidationDetails::type_mismatch(index, field, expected.type_name(), json_type_name(actual)),
    )
}
