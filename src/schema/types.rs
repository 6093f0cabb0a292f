//! Schema type definitions for the fixed record contracts.
//!
//! Supported field types:
//! - string: UTF-8 string
//! - number: JSON number, integer or fractional
//! - string list: array of strings with a minimum element count
//!
//! The variant set is closed and compiled in; schemas are built by the
//! record types themselves, never loaded from disk.

use std::collections::BTreeMap;

/// Supported field types for record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// JSON number; integers and fractional values both conform
    Number,
    /// Array of strings with at least `min_items` elements
    StringList {
        /// Minimum number of elements
        min_items: usize,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::StringList { .. } => "array of strings",
        }
    }
}

/// A single field contract: its type and whether it must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    /// Create a required number field
    pub fn required_number() -> Self {
        Self {
            field_type: FieldType::Number,
            required: true,
        }
    }

    /// Create a required string-list field with a minimum element count
    pub fn required_string_list(min_items: usize) -> Self {
        Self {
            field_type: FieldType::StringList { min_items },
            required: true,
        }
    }
}

/// The structural contract for one record variant.
///
/// Field tables are ordered (`BTreeMap`) so the "first violation" a
/// validation pass reports is deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Variant name, used in diagnostics
    pub variant: &'static str,
    /// Field contracts, keyed by field name
    pub fields: BTreeMap<&'static str, FieldDef>,
}

impl Schema {
    /// Create a new schema for a variant
    pub fn new(variant: &'static str, fields: BTreeMap<&'static str, FieldDef>) -> Self {
        Self { variant, fields }
    }

    /// Looks up a field contract by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Returns the number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
