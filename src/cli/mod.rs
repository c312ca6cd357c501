//! Command-line interface layer.
//!
//! `run_cli` parses nothing itself: `main` hands it the clap arguments and
//! turns the returned status into the process exit code.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

use crate::logging;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    logging::init(verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from(&result))
}
