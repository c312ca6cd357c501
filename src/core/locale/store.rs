use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::tree;

/// One `<lang>.json` file loaded into memory.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub language: String,
    pub path: PathBuf,
    pub tree: Value,
    /// Why the file could not be loaded. The tree is empty in that case and
    /// the file is never written back.
    pub load_error: Option<String>,
    changed: bool,
}

impl LocaleFile {
    pub fn new(language: impl Into<String>, path: impl Into<PathBuf>, tree: Value) -> Self {
        Self {
            language: language.into(),
            path: path.into(),
            tree,
            load_error: None,
            changed: false,
        }
    }

    fn degraded(language: String, path: PathBuf, error: String) -> Self {
        Self {
            language,
            path,
            tree: Value::Object(Map::new()),
            load_error: Some(error),
            changed: false,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.load_error.is_some()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}.json", self.language))
    }

    pub fn set(&mut self, path: &str, value: Value) {
        tree::set(&mut self.tree, path, value);
        self.changed = true;
    }

    pub fn delete(&mut self, path: &str) -> bool {
        let deleted = tree::delete(&mut self.tree, path);
        self.changed |= deleted;
        deleted
    }

    pub fn prune_empty(&mut self) {
        tree::prune_empty(&mut self.tree);
    }
}

/// Outcome of writing one locale file back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
    /// The file was not loaded cleanly, so overwriting it would lose data.
    Skipped(String),
}

/// Per-language tally of a save pass.
#[derive(Debug, Clone, Default)]
pub struct SaveReport {
    pub outcomes: BTreeMap<String, SaveOutcome>,
}

impl SaveReport {
    pub fn saved_count(&self) -> usize {
        self.count(|o| matches!(o, SaveOutcome::Saved))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| !matches!(o, SaveOutcome::Saved))
    }

    fn count(&self, pred: impl Fn(&SaveOutcome) -> bool) -> usize {
        self.outcomes.values().filter(|o| pred(o)).count()
    }
}

/// All locale files of a project, keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct LocaleSet {
    pub dir: PathBuf,
    pub files: BTreeMap<String, LocaleFile>,
}

impl LocaleSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, file: LocaleFile) {
        self.files.insert(file.language.clone(), file);
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn get(&self, language: &str) -> Option<&LocaleFile> {
        self.files.get(language)
    }

    pub fn get_mut(&mut self, language: &str) -> Option<&mut LocaleFile> {
        self.files.get_mut(language)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// `(language, tree)` pairs, sorted by language.
    pub fn trees(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.files
            .iter()
            .map(|(lang, file)| (lang.as_str(), &file.tree))
    }

    pub fn degraded_files(&self) -> impl Iterator<Item = &LocaleFile> {
        self.files.values().filter(|f| f.is_degraded())
    }

    /// Write every changed file back to disk.
    ///
    /// Each language is saved independently; one failure does not stop the
    /// others from being written.
    pub fn save_changed(&mut self) -> SaveReport {
        let mut report = SaveReport::default();

        for file in self.files.values_mut().filter(|f| f.changed) {
            let outcome = if let Some(error) = &file.load_error {
                tracing::warn!(
                    path = %file.path.display(),
                    "not saving locale that failed to load: {}",
                    error
                );
                SaveOutcome::Skipped(format!("file could not be loaded: {}", error))
            } else {
                match save(&file.path, &file.tree) {
                    Ok(()) => {
                        file.changed = false;
                        SaveOutcome::Saved
                    }
                    Err(e) => {
                        tracing::warn!(path = %file.path.display(), "save failed: {:#}", e);
                        SaveOutcome::Failed(format!("{:#}", e))
                    }
                }
            };
            report.outcomes.insert(file.language.clone(), outcome);
        }

        report
    }
}

/// Extracts the language code from a locale file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/jp.json" -> Some("jp")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `*.json` file in `dir`.
///
/// A missing directory is an error. A file that cannot be read or parsed
/// degrades to an empty tree so the other languages can still be analyzed.
pub fn load_all(dir: impl AsRef<Path>) -> Result<LocaleSet> {
    let dir = dir.as_ref();

    if !dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check the 'localesDir' setting or pass --locales-dir.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut set = LocaleSet::new(dir);

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read locales directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) != Some("json") || !path.is_file() {
            continue;
        }
        let Some(language) = extract_language(&path) else {
            continue;
        };

        let file = match load_tree(&path) {
            Ok(tree) => LocaleFile::new(language, path, tree),
            Err(e) => {
                tracing::warn!(path = %path.display(), "treating locale as empty: {:#}", e);
                LocaleFile::degraded(language, path, format!("{:#}", e))
            }
        };
        set.insert(file);
    }

    Ok(set)
}

fn load_tree(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let tree: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    if !tree.is_object() {
        bail!("Top-level value of {} is not an object", path.display());
    }
    Ok(tree)
}

/// Serialize a tree with 2-space indentation and a trailing newline.
pub fn to_pretty_json(tree: &Value) -> Result<String> {
    let mut content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;
    content.push('\n');
    Ok(content)
}

/// Write a tree to `path`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the target, so an interrupted write never truncates the
/// previous file.
pub fn save(path: &Path, tree: &Value) -> Result<()> {
    let content = to_pretty_json(tree)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
