//! agent-scaffold: generate agent definition files from plain-language requirements.
//!
//! This is the main entry point for the `agent-scaffold` CLI. It parses
//! arguments, sets up logging, runs the generation pipeline, and maps errors
//! to exit codes.

mod cli;
mod commands;
pub mod definition;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod prompt;
pub mod render;
pub mod synth;
pub mod validate;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
