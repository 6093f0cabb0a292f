//! Route records
//!
//! A route joins a start point to an end point under a route number. The
//! number is kept as a raw JSON number so a stored integer stays an
//! integer across round-trips; fractional numbers conform to the schema
//! even though the CLI only produces integers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

use super::errors::{RecordError, RecordResult};
use super::variant::{LoadPolicy, Variant};
use crate::schema::{FieldDef, Schema};

/// One route in the route register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Starting point, required
    pub name1: String,
    /// End point, required
    pub name2: String,
    /// Route number, required
    pub number: Number,
}

impl Route {
    /// Builds a route from CLI parts.
    pub fn from_parts(start: &str, end: &str, number: i64) -> RecordResult<Self> {
        if start.is_empty() {
            return Err(RecordError::EmptyField { field: "name1" });
        }
        if end.is_empty() {
            return Err(RecordError::EmptyField { field: "name2" });
        }

        Ok(Self {
            name1: start.to_string(),
            name2: end.to_string(),
            number: Number::from(number),
        })
    }
}

impl Variant for Route {
    const NAME: &'static str = "routes";
    const LOAD_POLICY: LoadPolicy = LoadPolicy::Lenient;

    fn schema() -> Schema {
        let mut fields = BTreeMap::new();
        fields.insert("name1", FieldDef::required_string());
        fields.insert("name2", FieldDef::required_string());
        fields.insert("number", FieldDef::required_number());
        Schema::new(Self::NAME, fields)
    }

    // Routes keep insertion order.
    fn sort_key(&self) -> Option<RecordResult<NaiveDate>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let route = Route::from_parts("Moscow", "Kazan", 5).unwrap();
        assert_eq!(route.name1, "Moscow");
        assert_eq!(route.name2, "Kazan");
        assert_eq!(route.number, Number::from(5));
    }

    #[test]
    fn test_number_serializes_as_integer() {
        let route = Route::from_parts("Moscow", "Kazan", 5).unwrap();
        let text = serde_json::to_string(&route).unwrap();
        assert!(text.contains("\"number\":5"));
        assert!(!text.contains("5.0"));
    }

    #[test]
    fn test_empty_point_rejected() {
        assert!(Route::from_parts("", "Kazan", 5).is_err());
        assert!(Route::from_parts("Moscow", "", 5).is_err());
    }

    #[test]
    fn test_no_sort_key() {
        let route = Route::from_parts("Moscow", "Kazan", 5).unwrap();
        assert!(route.sort_key().is_none());
    }
}
