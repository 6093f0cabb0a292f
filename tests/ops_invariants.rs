//! Record Operation Tests
//!
//! Contracts:
//! - After an add, the person collection is sorted ascending by composed
//!   birthday date; the sort is stable on equal dates
//! - An unparseable birthday anywhere in the collection blocks the add
//! - Routes append only; insertion order is kept
//! - select_by_field returns exactly the matching subsequence, in order,
//!   and an empty result on no match

use kardex::model::{Person, Route};
use kardex::ops::{self, FieldSelector, Persistence};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn person(surname: &str, name: &str, birthday: &str) -> Person {
    Person::from_parts(surname, name, None, birthday).unwrap()
}

fn route(start: &str, end: &str, number: i64) -> Route {
    Route::from_parts(start, end, number).unwrap()
}

// =============================================================================
// Add + Sort Contracts
// =============================================================================

/// Scenario: Ivanov (1990) then Smirnov (1985) -> Smirnov sorts first.
#[test]
fn test_person_add_sorts_chronologically() {
    let mut people = Vec::new();

    ops::add(&mut people, person("Ivanov", "Petr", "01.01.1990")).unwrap();
    ops::add(&mut people, person("Smirnov", "Anna", "15.05.1985")).unwrap();

    assert_eq!(people[0].surname, "Smirnov");
    assert_eq!(people[1].surname, "Ivanov");
}

/// Adjacent pairs are non-decreasing by composed date after every add.
#[test]
fn test_collection_ordered_after_each_add() {
    let mut people = Vec::new();
    let birthdays = ["03.03.1993", "01.01.1990", "15.05.1985", "20.12.1999"];

    for (i, birthday) in birthdays.iter().enumerate() {
        ops::add(&mut people, person(&format!("P{}", i), "Test", birthday)).unwrap();

        for pair in people.windows(2) {
            let a = pair[0].birthday_date().unwrap();
            let b = pair[1].birthday_date().unwrap();
            assert!(a <= b);
        }
    }
}

/// Equal dates keep their pre-sort relative order (stable sort).
#[test]
fn test_equal_dates_keep_relative_order() {
    let mut people = Vec::new();

    ops::add(&mut people, person("First", "A", "01.01.1990")).unwrap();
    ops::add(&mut people, person("Second", "B", "01.01.1990")).unwrap();
    ops::add(&mut people, person("Third", "C", "01.01.1990")).unwrap();

    let surnames: Vec<&str> = people.iter().map(|p| p.surname.as_str()).collect();
    assert_eq!(surnames, ["First", "Second", "Third"]);
}

/// A mutating add reports that persistence is required.
#[test]
fn test_add_requires_persistence() {
    let mut people = Vec::new();
    let persistence = ops::add(&mut people, person("Ivanov", "Petr", "01.01.1990")).unwrap();
    assert_eq!(persistence, Persistence::Required);
}

/// A corrupt pre-existing birthday blocks every future add.
#[test]
fn test_corrupt_record_blocks_adds() {
    let mut people = vec![person("Corrupt", "Entry", "99.99.9999")];

    let err = ops::add(&mut people, person("Ivanov", "Petr", "01.01.1990")).unwrap_err();
    assert!(err.to_string().contains("record 0"));
}

/// An invalid new birthday fails the add itself.
#[test]
fn test_invalid_new_birthday_fails_add() {
    let mut people = vec![person("Ivanov", "Petr", "01.01.1990")];

    let result = ops::add(&mut people, person("Broken", "Date", "31.02.1990"));
    assert!(result.is_err());
}

/// Routes are appended only, never reordered.
#[test]
fn test_route_add_keeps_insertion_order() {
    let mut routes = Vec::new();

    ops::add(&mut routes, route("Moscow", "Kazan", 9)).unwrap();
    ops::add(&mut routes, route("Kazan", "Ufa", 1)).unwrap();
    ops::add(&mut routes, route("Ufa", "Perm", 5)).unwrap();

    let numbers: Vec<i64> = routes.iter().map(|r| r.number.as_i64().unwrap()).collect();
    assert_eq!(numbers, [9, 1, 5]);
}

/// sort_by_date on an unordered variant is a no-op.
#[test]
fn test_sort_by_date_leaves_routes_untouched() {
    let mut routes = vec![route("Moscow", "Kazan", 9), route("Kazan", "Ufa", 1)];

    ops::sort_by_date(&mut routes).unwrap();

    assert_eq!(routes[0].name1, "Moscow");
    assert_eq!(routes[1].name1, "Kazan");
}

// =============================================================================
// Selection Contracts
// =============================================================================

/// Scenario: routes numbered 3, 5, 5 -> selecting 5 returns both, in order.
#[test]
fn test_select_duplicate_route_numbers() {
    let routes = vec![
        route("Moscow", "Kazan", 3),
        route("Kazan", "Ufa", 5),
        route("Ufa", "Perm", 5),
    ];

    let selected = FieldSelector::select_by_field(&routes, "number", &json!(5));
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].name1, "Kazan");
    assert_eq!(selected[1].name1, "Ufa");
}

/// Selection returns exactly the matching subsequence for surnames.
#[test]
fn test_select_by_surname_subsequence() {
    let people = vec![
        person("Ivanov", "Petr", "01.01.1990"),
        person("Smirnov", "Anna", "15.05.1985"),
        person("Ivanov", "Oleg", "02.02.1992"),
    ];

    let selected = FieldSelector::select_by_field(&people, "surname", &json!("Ivanov"));
    let names: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Petr", "Oleg"]);
}

/// No match is an empty result, not an error.
#[test]
fn test_select_no_match_is_empty() {
    let people = vec![person("Ivanov", "Petr", "01.01.1990")];

    let selected = FieldSelector::select_by_field(&people, "surname", &json!("Sidorov"));
    assert!(selected.is_empty());

    let routes = vec![route("Moscow", "Kazan", 3)];
    let selected = FieldSelector::select_by_field(&routes, "number", &json!(8));
    assert!(selected.is_empty());
}

/// Selecting from an empty collection is an empty result.
#[test]
fn test_select_from_empty_collection() {
    let people: Vec<Person> = Vec::new();
    let selected = FieldSelector::select_by_field(&people, "surname", &json!("Ivanov"));
    assert!(selected.is_empty());
}
