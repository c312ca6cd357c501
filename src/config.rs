use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    extract::{DynamicKeyTemplate, compile_templates, default_dynamic_keys},
    repair::{TranslationTable, default_translations},
};

pub const CONFIG_FILE_NAME: &str = ".i18nsweeprc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Languages consulted first when looking for a value to copy.
    #[serde(default = "default_language_priority")]
    pub language_priority: Vec<String>,
    #[serde(default = "default_dynamic_keys")]
    pub dynamic_keys: Vec<DynamicKeyTemplate>,
    #[serde(default = "default_translations")]
    pub translations: TranslationTable,
}

fn default_locales_dir() -> String {
    "public/locales".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    [".tsx", ".ts", ".js", ".jsx"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    ["node_modules", ".next", "dist", "build", "out", "coverage"]
        .map(String::from)
        .to_vec()
}

fn default_language_priority() -> Vec<String> {
    ["en", "jp", "zh"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            source_dir: default_source_dir(),
            extensions: default_extensions(),
            ignores: default_ignores(),
            language_priority: default_language_priority(),
            dynamic_keys: default_dynamic_keys(),
            translations: default_translations(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern in `ignores` is invalid or a
    /// dynamic key template cannot be compiled.
    pub fn validate(&self) -> Result<()> {
        // Entries without wildcards are plain substrings, so "[locale]" is fine.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }

        compile_templates(&self.dynamic_keys).context("Invalid entry in 'dynamicKeys'")?;

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    let mut json =
        serde_json::to_string_pretty(&config).context("Failed to generate default config.")?;
    json.push('\n');
    Ok(json)
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
