use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        analyze::{AnalysisResult, analyze},
        extract::{CompiledTemplate, ExtractedKeys, KeyExtractor, compile_templates},
        file_scanner::scan_files,
        locale::{LocaleSet, load_all},
        repair::Placeholders,
    },
};

/// Which key extraction a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Literal keys only.
    Literal,
    /// Literal keys plus the dynamic key template table.
    Dynamic,
}

/// Everything a command needs: merged config, the source file list and the
/// loaded locale files.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--locales-dir`)
/// 2. `.i18nsweeprc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root: where the config file is searched from and config
    /// paths are resolved against.
    pub root_dir: PathBuf,

    pub source_dir: PathBuf,

    pub locales_dir: PathBuf,

    /// Source files to scan, sorted.
    pub files: BTreeSet<String>,

    pub locales: LocaleSet,

    pub verbose: bool,

    templates: Vec<CompiledTemplate>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Source directory doesn't exist
    /// - Locales directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        match &config_result.path {
            Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
            None => tracing::debug!("no {} found, using default configuration", CONFIG_FILE_NAME),
        }

        let mut config = config_result.config;

        // Paths given on the command line are taken as-is; config paths are
        // relative to the project root.
        let source_dir = match &common_args.source_dir {
            Some(dir) => {
                config.source_dir = dir.to_string_lossy().to_string();
                dir.clone()
            }
            None => resolve_dir(&root_dir, &config.source_dir),
        };
        let locales_dir = match &common_args.locales_dir {
            Some(dir) => {
                config.locales_dir = dir.to_string_lossy().to_string();
                dir.clone()
            }
            None => resolve_dir(&root_dir, &config.locales_dir),
        };

        let templates = compile_templates(&config.dynamic_keys)
            .context("Invalid entry in 'dynamicKeys'")?;

        // An empty scan would make every locale key look unused.
        if !source_dir.exists() {
            bail!(
                "Source directory '{}' does not exist.\n\
                 Hint: Check the 'sourceDir' setting or pass --source-dir.",
                source_dir.display()
            );
        }
        if !source_dir.is_dir() {
            bail!("'{}' is not a directory.", source_dir.display());
        }

        let scan_result = scan_files(&source_dir, &config.extensions, &config.ignores);
        if scan_result.skipped_count > 0 {
            tracing::warn!(
                skipped = scan_result.skipped_count,
                "some source paths were skipped due to access errors"
            );
        }

        let locales = load_all(&locales_dir)?;

        Ok(Self {
            config,
            root_dir,
            source_dir,
            locales_dir,
            files: scan_result.files,
            locales,
            verbose,
            templates,
        })
    }

    /// Scan every source file for used keys.
    pub fn extract(&self, mode: ExtractMode) -> ExtractedKeys {
        let extractor = match mode {
            ExtractMode::Literal => KeyExtractor::literal_only(),
            ExtractMode::Dynamic => KeyExtractor::new(&self.templates),
        };
        extractor.extract_files(&self.files)
    }

    pub fn analyze(&self, extracted: &ExtractedKeys) -> AnalysisResult {
        analyze(&extracted.used, self.locales.trees())
    }

    pub fn placeholders(&self) -> Placeholders<'_> {
        Placeholders::new(&self.config.language_priority, &self.config.translations)
    }
}

/// Resolve a config path against the project root. Absolute paths are kept.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let rel = path.strip_prefix(".").unwrap_or(path);
    root_dir.join(rel)
}
