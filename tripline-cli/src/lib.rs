//! Command-line interface for planning Tripline itineraries.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use serde::Serialize;

mod error;
mod plan;
mod search;
mod show;

pub use error::CliError;

use plan::{PlanArgs, SaveArgs};
use search::{SearchArgs, SuggestArgs};
use show::ShowArgs;

pub(crate) const ARG_TRIP: &str = "trip";
pub(crate) const ARG_STORE_DIR: &str = "store-dir";
pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_LOCATION_ID: &str = "location-id";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ENV_PLAN_TRIP: &str = "TRIPLINE_CMDS_PLAN_TRIP_PATH";
pub(crate) const ENV_SAVE_TRIP: &str = "TRIPLINE_CMDS_SAVE_TRIP_PATH";
pub(crate) const ENV_SEARCH_QUERY: &str = "TRIPLINE_CMDS_SEARCH_QUERY";
pub(crate) const ENV_SEARCH_CATALOGUE: &str = "TRIPLINE_CMDS_SEARCH_CATALOGUE";
pub(crate) const ENV_SUGGEST_LOCATION_ID: &str = "TRIPLINE_CMDS_SUGGEST_LOCATION_ID";
pub(crate) const ENV_SUGGEST_CATALOGUE: &str = "TRIPLINE_CMDS_SUGGEST_CATALOGUE";

/// Directory holding saved snapshots when none is configured.
pub(crate) const DEFAULT_STORE_DIR: &str = ".tripline";

/// Run the Tripline CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => plan::run_plan(args, writer),
        Command::Save(args) => plan::run_save(args, writer),
        Command::Show(args) => show::run_show(args, writer),
        Command::Search(args) => search::run_search(args, writer),
        Command::Suggest(args) => search::run_suggest(args, writer),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
    if installed.is_err() {
        debug!("logger already installed; keeping the existing one");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripline",
    about = "Plan multi-stop trips and estimate the travel between stops",
    version
)]
struct Cli {
    /// Log debug detail.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the travel legs derived from a trip plan.
    Plan(PlanArgs),
    /// Save a trip plan as the current itinerary.
    Save(SaveArgs),
    /// Summarise the saved itinerary.
    Show(ShowArgs),
    /// Search the place catalogue.
    Search(SearchArgs),
    /// Suggest places near a catalogue location.
    Suggest(SuggestArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tripline_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
