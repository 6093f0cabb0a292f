//! CLI argument definitions using clap
//!
//! Commands:
//! - kardex people add <FILE> -s SURNAME -n NAME [-z ZODIAC] -b DD.MM.YYYY
//! - kardex people select <FILE> -s SURNAME
//! - kardex people display <FILE>
//! - kardex routes add <FILE> -s START -n END -z NUMBER
//! - kardex routes list <FILE>
//! - kardex routes select <FILE> --number NUMBER
//!
//! The two families keep their historical flag letters, including the
//! route family's `-z` for the route number. Route selection takes a
//! required flag rather than reading the number interactively.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// kardex - a strict, schema-validated flat-file record manager
#[derive(Parser, Debug)]
#[command(name = "kardex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the people register
    People(PeopleCli),

    /// Manage the route register
    Routes(RoutesCli),
}

#[derive(Args, Debug)]
pub struct PeopleCli {
    #[command(subcommand)]
    pub command: PeopleCommand,
}

#[derive(Subcommand, Debug)]
pub enum PeopleCommand {
    /// Add a new person
    Add {
        /// The data file name
        file: PathBuf,

        /// The person's surname
        #[arg(short, long)]
        surname: String,

        /// The person's name
        #[arg(short, long)]
        name: String,

        /// The person's zodiac sign
        #[arg(short, long)]
        zodiac: Option<String>,

        /// The person's birthday as DD.MM.YYYY
        #[arg(short, long)]
        birthday: String,
    },

    /// Select people by surname
    Select {
        /// The data file name
        file: PathBuf,

        /// The required surname
        #[arg(short, long)]
        surname: String,
    },

    /// Display all people
    Display {
        /// The data file name
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct RoutesCli {
    #[command(subcommand)]
    pub command: RoutesCommand,
}

#[derive(Subcommand, Debug)]
pub enum RoutesCommand {
    /// Add a new route
    Add {
        /// The data file name
        file: PathBuf,

        /// The route's starting point
        #[arg(short = 's', long)]
        start: String,

        /// The route's end point
        #[arg(short = 'n', long)]
        end: String,

        /// The route number
        #[arg(short = 'z', long)]
        number: i64,
    },

    /// List all routes
    List {
        /// The data file name
        file: PathBuf,
    },

    /// Select a route by its number
    Select {
        /// The data file name
        file: PathBuf,

        /// The required route number
        #[arg(long)]
        number: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_add_flags() {
        let cli = Cli::try_parse_from([
            "kardex", "people", "add", "people.json", "-s", "Ivanov", "-n", "Petr", "-b",
            "01.01.1990",
        ])
        .unwrap();

        match cli.command {
            Command::People(people) => match people.command {
                PeopleCommand::Add {
                    surname,
                    name,
                    zodiac,
                    birthday,
                    ..
                } => {
                    assert_eq!(surname, "Ivanov");
                    assert_eq!(name, "Petr");
                    assert_eq!(zodiac, None);
                    assert_eq!(birthday, "01.01.1990");
                }
                _ => panic!("expected people add"),
            },
            _ => panic!("expected people family"),
        }
    }

    #[test]
    fn test_routes_add_uses_z_for_number() {
        let cli = Cli::try_parse_from([
            "kardex", "routes", "add", "routes.json", "-s", "Moscow", "-n", "Kazan", "-z", "5",
        ])
        .unwrap();

        match cli.command {
            Command::Routes(routes) => match routes.command {
                RoutesCommand::Add { number, .. } => assert_eq!(number, 5),
                _ => panic!("expected routes add"),
            },
            _ => panic!("expected routes family"),
        }
    }

    #[test]
    fn test_routes_select_requires_number_flag() {
        let result = Cli::try_parse_from(["kardex", "routes", "select", "routes.json"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "kardex", "routes", "select", "routes.json", "--number", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Routes(routes) => match routes.command {
                RoutesCommand::Select { number, .. } => assert_eq!(number, 5),
                _ => panic!("expected routes select"),
            },
            _ => panic!("expected routes family"),
        }
    }
}
