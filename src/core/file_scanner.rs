use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards match as a substring of the path.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Ignore rules, split by kind.
struct IgnoreRules {
    substrings: Vec<String>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(ignores: &[String]) -> Self {
        let mut substrings = Vec::new();
        let mut globs = Vec::new();

        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => tracing::warn!("invalid ignore pattern '{}': {}", p, e),
                }
            } else {
                substrings.push(p.clone());
            }
        }

        Self { substrings, globs }
    }

    fn is_ignored(&self, relative: &str) -> bool {
        self.substrings.iter().any(|s| relative.contains(s.as_str()))
            || self.globs.iter().any(|p| p.matches(relative))
    }
}

/// Recursively collect source files under `source_dir`.
///
/// Ignore entries are matched against the path relative to `source_dir`,
/// so a project living under e.g. `/home/build/` is not ignored wholesale.
pub fn scan_files(source_dir: &Path, extensions: &[String], ignores: &[String]) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;
    let rules = IgnoreRules::new(ignores);

    let walker = WalkDir::new(source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let relative = relative_path(source_dir, entry.path());
            relative.is_empty() || !rules.is_ignored(&relative)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!("cannot access path: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_scannable_file(path, extensions) {
            files.insert(path.to_string_lossy().into_owned());
        }
    }

    tracing::debug!(
        dir = %source_dir.display(),
        files = files.len(),
        skipped = skipped_count,
        "scanned source files"
    );

    ScanResult {
        files,
        skipped_count,
    }
}

fn relative_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .replace('\\', "/")
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
