//! CLI module for kardex
//!
//! Provides the command-line interface for the two record registers:
//! - people: add, select, display
//! - routes: add, list, select
//!
//! Dispatch threads the explicit persistence decision from the ops layer;
//! tables go to stdout, diagnostics to stderr.

mod args;
mod commands;
mod errors;
mod render;

pub use args::{Cli, Command, PeopleCli, PeopleCommand, RoutesCli, RoutesCommand};
pub use commands::{run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use render::{PersonTable, RouteTable};
