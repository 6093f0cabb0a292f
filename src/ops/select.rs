//! Field selection
//!
//! Linear scan with exact matching: string equality for text fields,
//! numeric equality for numbers (an integer 5 matches a stored 5.0, but
//! never the string "5"). A missing field is no match. Relative order is
//! preserved; no match is an empty result, not an error.

use serde_json::Value;

use crate::model::Variant;

/// Selects records by exact field equality.
pub struct FieldSelector;

impl FieldSelector {
    /// Returns all records whose `field` equals `value`, in their original
    /// relative order.
    pub fn select_by_field<V: Variant>(records: &[V], field: &str, value: &Value) -> Vec<V> {
        records
            .iter()
            .filter(|record| Self::matches(*record, field, value))
            .cloned()
            .collect()
    }

    /// Checks one record against the predicate.
    fn matches<V: Variant>(record: &V, field: &str, expected: &Value) -> bool {
        let tree = match serde_json::to_value(record) {
            Ok(tree) => tree,
            Err(_) => return false,
        };
        match tree.get(field) {
            Some(actual) => Self::eq_match(actual, expected),
            None => false,
        }
    }

    /// Exact equality; numbers compare by value so integer and fractional
    /// encodings of the same quantity are equal. No cross-type coercion.
    fn eq_match(actual: &Value, expected: &Value) -> bool {
        match (actual, expected) {
            (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(af), Some(bf)) => af == bf,
                _ => a == b,
            },
            _ => actual == expected,
        }
    }
}
