//! CLI command implementations
//!
//! Every handler runs the same sequence: load the collection under its
//! variant's policy, run the operation, save iff the operation reported
//! that persistence is required, render the result. Handlers never track
//! dirty state; the `Persistence` value returned by the mutating
//! operation is the only save trigger.

use std::path::Path;

use serde_json::json;

use crate::model::{Person, Route};
use crate::observability::Logger;
use crate::ops::{self, FieldSelector, Persistence};
use crate::store;

use super::args::{Cli, Command, PeopleCommand, RoutesCommand};
use super::errors::CliResult;
use super::render::{PersonTable, RouteTable};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command to its handler.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::People(people) => match people.command {
            PeopleCommand::Add {
                file,
                surname,
                name,
                zodiac,
                birthday,
            } => people_add(&file, &surname, &name, zodiac, &birthday),
            PeopleCommand::Select { file, surname } => people_select(&file, &surname),
            PeopleCommand::Display { file } => people_display(&file),
        },
        Command::Routes(routes) => match routes.command {
            RoutesCommand::Add {
                file,
                start,
                end,
                number,
            } => routes_add(&file, &start, &end, number),
            RoutesCommand::List { file } => routes_list(&file),
            RoutesCommand::Select { file, number } => routes_select(&file, number),
        },
    }
}

fn people_add(
    file: &Path,
    surname: &str,
    name: &str,
    zodiac: Option<String>,
    birthday: &str,
) -> CliResult<()> {
    let mut people = store::load_with_policy::<Person>(file)?;
    let person = Person::from_parts(surname, name, zodiac, birthday)?;

    let persistence = ops::add(&mut people, person)?;
    save_if_required(file, &people, persistence)?;

    Ok(())
}

fn people_select(file: &Path, surname: &str) -> CliResult<()> {
    let people = store::load_with_policy::<Person>(file)?;
    let selected = FieldSelector::select_by_field(&people, "surname", &json!(surname));
    println!("{}", PersonTable::render(&selected));
    Ok(())
}

fn people_display(file: &Path) -> CliResult<()> {
    let people = store::load_with_policy::<Person>(file)?;
    println!("{}", PersonTable::render(&people));
    Ok(())
}

fn routes_add(file: &Path, start: &str, end: &str, number: i64) -> CliResult<()> {
    let mut routes = store::load_with_policy::<Route>(file)?;
    let route = Route::from_parts(start, end, number)?;

    let persistence = ops::add(&mut routes, route)?;
    save_if_required(file, &routes, persistence)?;

    println!("Route added.");
    Ok(())
}

fn routes_list(file: &Path) -> CliResult<()> {
    let routes = store::load_with_policy::<Route>(file)?;
    println!("{}", RouteTable::render(&routes));
    Ok(())
}

fn routes_select(file: &Path, number: i64) -> CliResult<()> {
    let routes = store::load_with_policy::<Route>(file)?;
    let selected = FieldSelector::select_by_field(&routes, "number", &json!(number));

    if selected.is_empty() {
        println!("No route with number {}.", number);
    } else {
        println!("{}", RouteTable::render(&selected));
    }
    Ok(())
}

/// Saves the collection when the operation reported a divergence from disk.
fn save_if_required<V: crate::model::Variant>(
    file: &Path,
    records: &[V],
    persistence: Persistence,
) -> CliResult<()> {
    if persistence == Persistence::Required {
        store::save(file, records)?;
        let path_text = file.display().to_string();
        let count = records.len().to_string();
        Logger::info(
            "collection_saved",
            &[
                ("path", path_text.as_str()),
                ("records", count.as_str()),
                ("variant", V::NAME),
            ],
        );
    }
    Ok(())
}
