use std::{fs, path::PathBuf};

use anyhow::{Context, Ok, Result};

use super::{
    super::args::InitCommand,
    helper::finish,
    {CommandResult, CommandSummary, InitSummary},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file, refusing to overwrite an existing one.
pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let root = cmd.root.unwrap_or_else(|| PathBuf::from("."));
    let path = root.join(CONFIG_FILE_NAME);

    let error = if path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        None
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { path, error }),
        Vec::new(),
        0,
        0,
        true,
    ))
}
