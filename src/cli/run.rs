//! Dispatches parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with issue counts, save tallies and exit behavior
//! - `Err` if the command cannot run (invalid config, missing locales dir)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, audit::audit, check::check, clean::clean, init::init,
        translate::translate,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
