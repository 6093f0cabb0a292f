//! Table rendering for CLI output
//!
//! Reproduces the registers' fixed-width table layout: a rule line, a
//! centered header row, one left-aligned row per record, numbered from 1.
//! Rendering returns a `String`; handlers own the printing.

use crate::model::{Person, Route};

/// Message shown instead of a table when the people register is empty.
const EMPTY_REGISTER: &str = "The register is empty.";

/// Renders people as a five-column table.
pub struct PersonTable;

impl PersonTable {
    /// Renders the table, or the empty-register message.
    pub fn render(people: &[Person]) -> String {
        if people.is_empty() {
            return EMPTY_REGISTER.to_string();
        }

        let rule = format!(
            "+-{}-+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(4),
            "-".repeat(30),
            "-".repeat(30),
            "-".repeat(20),
            "-".repeat(20)
        );

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "| {:^4} | {:^30} | {:^30} | {:^20} | {:^20} |",
            "No.", "Surname", "Name", "Zodiac", "Birthday"
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for (idx, person) in people.iter().enumerate() {
            out.push_str(&format!(
                "| {:>4} | {:<30} | {:<30} | {:<20} | {:>20} |",
                idx + 1,
                person.surname,
                person.name,
                person.zodiac.as_deref().unwrap_or(""),
                person.birthday_text()
            ));
            out.push('\n');
        }

        out.push_str(&rule);
        out
    }
}

/// Renders routes as a four-column table.
pub struct RouteTable;

impl RouteTable {
    /// Renders the table; an empty register renders headers only.
    pub fn render(routes: &[Route]) -> String {
        let rule = format!(
            "+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(4),
            "-".repeat(30),
            "-".repeat(20),
            "-".repeat(10)
        );

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "| {:^4} | {:^30} | {:^20} | {:^10} |",
            "No.", "Start point", "End point", "Route no."
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for (idx, route) in routes.iter().enumerate() {
            out.push_str(&format!(
                "| {:>4} | {:<30} | {:<20} | {:>10} |",
                idx + 1,
                route.name1,
                route.name2,
                route.number.to_string()
            ));
            out.push('\n');
        }

        out.push_str(&rule);
        out
    }
}
