//! Person records
//!
//! A person carries a surname, a name, an optional zodiac sign, and a
//! birthday stored as its day/month/year parts, each a zero-padded decimal
//! string. The birthday is entered as one `DD.MM.YYYY` value and split on
//! the dot separator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{RecordError, RecordResult};
use super::variant::{LoadPolicy, Variant};
use crate::schema::{FieldDef, Schema};

/// Date format the birthday parts compose into
const DATE_FORMAT: &str = "%d.%m.%Y";

/// One person in the people register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Surname, required
    pub surname: String,
    /// Given name, required
    pub name: String,
    /// Zodiac sign; omitted from the file when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    /// Birthday parts: day, month, year as decimal strings
    pub birthday: Vec<String>,
}

impl Person {
    /// Builds a person from CLI parts, splitting `birthday` on `.`.
    ///
    /// The date is not parsed here; a malformed birthday surfaces when the
    /// collection is re-sorted after the add.
    pub fn from_parts(
        surname: &str,
        name: &str,
        zodiac: Option<String>,
        birthday: &str,
    ) -> RecordResult<Self> {
        if surname.is_empty() {
            return Err(RecordError::EmptyField { field: "surname" });
        }
        if name.is_empty() {
            return Err(RecordError::EmptyField { field: "name" });
        }

        Ok(Self {
            surname: surname.to_string(),
            name: name.to_string(),
            zodiac,
            birthday: birthday.split('.').map(str::to_string).collect(),
        })
    }

    /// The birthday parts joined back into `DD.MM.YYYY` form.
    pub fn birthday_text(&self) -> String {
        self.birthday.join(".")
    }

    /// Parses the birthday parts into a calendar date.
    pub fn birthday_date(&self) -> RecordResult<NaiveDate> {
        let value = self.birthday_text();
        NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map_err(|source| RecordError::InvalidDate { value, source })
    }
}

impl Variant for Person {
    const NAME: &'static str = "people";
    const LOAD_POLICY: LoadPolicy = LoadPolicy::Strict;

    fn schema() -> Schema {
        let mut fields = BTreeMap::new();
        fields.insert("surname", FieldDef::required_string());
        fields.insert("name", FieldDef::required_string());
        fields.insert("zodiac", FieldDef::optional_string());
        fields.insert("birthday", FieldDef::required_string_list(3));
        Schema::new(Self::NAME, fields)
    }

    fn sort_key(&self) -> Option<RecordResult<NaiveDate>> {
        Some(self.birthday_date())
    }
}
