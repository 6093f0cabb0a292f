//! Append and re-sort
//!
//! Adding a record appends it to the end of the collection, then re-sorts
//! the whole collection for date-keyed variants. Every record's key is
//! parsed before any reordering happens, so a single corrupt record fails
//! the operation loudly, even when that record predates the add, and
//! nothing is left half-sorted.

use chrono::NaiveDate;

use super::errors::{OpsError, OpsResult};
use crate::model::Variant;

/// Whether the in-memory collection now diverges from what is on disk.
///
/// Mutating operations return this so command handlers decide persistence
/// explicitly; there is no ambient dirty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// The collection changed and must be saved
    Required,
    /// The collection is unchanged
    NotRequired,
}

/// Appends a record and restores the variant's ordering.
///
/// Date-keyed variants are re-sorted ascending by calendar date; unordered
/// variants keep insertion order. On error the collection must not be
/// saved; the caller only persists on `Ok`.
pub fn add<V: Variant>(records: &mut Vec<V>, record: V) -> OpsResult<Persistence> {
    records.push(record);
    sort_by_date(records)?;
    Ok(Persistence::Required)
}

/// Sorts a collection ascending by its variant's date key.
///
/// The sort is stable: records sharing a date keep their pre-sort relative
/// order. A variant without a date key is left untouched.
///
/// # Errors
///
/// `OpsError::DateParse` naming the first record whose key fails to
/// parse; the collection is not reordered in that case.
pub fn sort_by_date<V: Variant>(records: &mut Vec<V>) -> OpsResult<()> {
    let mut keys: Vec<NaiveDate> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match record.sort_key() {
            None => return Ok(()),
            Some(Ok(date)) => keys.push(date),
            Some(Err(source)) => return Err(OpsError::DateParse { index, source }),
        }
    }

    // All keys parsed; reorder via decorate-sort-undecorate.
    let mut keyed: Vec<(NaiveDate, V)> = keys.into_iter().zip(records.drain(..)).collect();
    keyed.sort_by_key(|(date, _)| *date);
    records.extend(keyed.into_iter().map(|(_, record)| record));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, Route};

    fn person(surname: &str, birthday: &str) -> Person {
        Person::from_parts(surname, "Test", None, birthday).unwrap()
    }

    #[test]
    fn test_add_sorts_people_by_birthday() {
        let mut people = Vec::new();
        add(&mut people, person("Ivanov", "01.01.1990")).unwrap();
        let persistence = add(&mut people, person("Smirnov", "15.05.1985")).unwrap();

        assert_eq!(persistence, Persistence::Required);
        assert_eq!(people[0].surname, "Smirnov");
        assert_eq!(people[1].surname, "Ivanov");
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let mut people = vec![
            person("First", "01.01.1990"),
            person("Second", "01.01.1990"),
            person("Earlier", "01.01.1980"),
        ];
        sort_by_date(&mut people).unwrap();

        assert_eq!(people[0].surname, "Earlier");
        assert_eq!(people[1].surname, "First");
        assert_eq!(people[2].surname, "Second");
    }

    #[test]
    fn test_corrupt_existing_record_blocks_add() {
        let mut people = vec![person("Corrupt", "99.99.1990")];
        let err = add(&mut people, person("Ivanov", "01.01.1990")).unwrap_err();

        let OpsError::DateParse { index, .. } = err;
        assert_eq!(index, 0);
    }

    #[test]
    fn test_failed_sort_does_not_reorder() {
        let mut people = vec![
            person("Zulu", "01.01.1995"),
            person("Alpha", "01.01.1990"),
            person("Broken", "not.a.date"),
        ];
        assert!(sort_by_date(&mut people).is_err());

        // Pre-sort order intact.
        assert_eq!(people[0].surname, "Zulu");
        assert_eq!(people[1].surname, "Alpha");
        assert_eq!(people[2].surname, "Broken");
    }

    #[test]
    fn test_routes_keep_insertion_order() {
        let mut routes = Vec::new();
        add(&mut routes, Route::from_parts("Moscow", "Kazan", 9).unwrap()).unwrap();
        add(&mut routes, Route::from_parts("Kazan", "Ufa", 1).unwrap()).unwrap();

        assert_eq!(routes[0].number, serde_json::Number::from(9));
        assert_eq!(routes[1].number, serde_json::Number::from(1));
    }
}
