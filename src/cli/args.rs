//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report unused keys and keys missing from some languages
//! - `audit`: Full consistency audit, aware of dynamic key templates
//! - `translate`: Add placeholder values for missing or inconsistent keys
//! - `clean`: Delete keys no source file uses
//! - `init`: Write a default `.i18nsweeprc.json`
//!
//! Every command also answers to the name of the npm script it replaces
//! (`check-i18n`, `professional-i18n-check`, `auto-translate-i18n`,
//! `delete-unused-i18n`).

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Audit(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched upward from here
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locales directory (overrides config file)
    #[arg(long, env = "I18N_SWEEP_LOCALES_DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Source code directory (overrides config file)
    #[arg(long, env = "I18N_SWEEP_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the values (default is dry-run)
    #[arg(long)]
    pub execute: bool,

    /// Fill keys present in some languages but not others, instead of keys
    /// used in source but defined nowhere
    #[arg(long)]
    pub inconsistent: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub execute: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config file into (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report unused keys and keys missing from some languages
    #[command(alias = "check-i18n")]
    Check(CheckCommand),
    /// Report missing, inconsistent and potentially unused keys, expanding dynamic keys
    #[command(alias = "professional-i18n-check")]
    Audit(AuditCommand),
    /// Add placeholder values for missing keys to every locale file
    #[command(alias = "auto-translate-i18n")]
    Translate(TranslateCommand),
    /// Delete unused translation keys from every locale file
    #[command(alias = "delete-unused-i18n")]
    Clean(CleanCommand),
    /// Initialize a new .i18nsweeprc.json configuration file
    Init(InitCommand),
}
