//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tripline_cli::CliError;

fn main() {
    match tripline_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            let report = eyre::Report::new(err);
            eprintln!("tripline: {report:#}");
            std::process::exit(1);
        }
    }
}
