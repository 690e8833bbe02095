//! Command-line interface for querying road collision archives.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod query;

pub use error::CliError;
use query::QueryArgs;

const ARG_RESOURCES_DIR: &str = "resources-dir";
const ARG_REGION: &str = "region";
const ARG_WHERE: &str = "where";
const ARG_JSON: &str = "json";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments are invalid, the archives cannot be
/// loaded, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Query(args) => query::run_query(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "road-collisions",
    about = "Query bundled road collision records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a region's archives and report the collisions matching filters.
    Query(QueryArgs),
}

#[cfg(test)]
mod tests;
