//! Key-set extraction from source text.
//!
//! Source files are scanned lexically rather than parsed. Each file goes
//! through three passes:
//!
//! 1. literal call arguments: `t("key")`, `getTranslation(x, "key")`
//! 2. the generic fallback: any quoted `identifier.identifier` literal
//! 3. the dynamic template table: every key of a matched template
//!
//! Candidates from the first two passes are filtered by [`is_valid_key`],
//! which drops URLs, constants, paths and other literals the fallback
//! pattern over-matches.

pub mod dynamic;
pub mod patterns;

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
};

pub use dynamic::{CompiledTemplate, DynamicKeyTemplate, compile_templates, default_dynamic_keys};
pub use patterns::is_valid_key;
use patterns::{DOTTED_LITERAL_REGEX, HELPER_CALL_REGEX, LITERAL_CALL_REGEX};

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFile {
    pub file_path: String,
    pub error: String,
}

/// The used-key set of one scan.
#[derive(Debug, Default, Clone)]
pub struct ExtractedKeys {
    /// Every key referenced by source code.
    pub used: BTreeSet<String>,
    /// The subset of `used` generated from dynamic templates.
    pub dynamic: BTreeSet<String>,
    /// Files each key was found in.
    pub sources: BTreeMap<String, BTreeSet<String>>,
    pub files_scanned: usize,
    pub unreadable: Vec<UnreadableFile>,
}

impl ExtractedKeys {
    fn add(&mut self, key: &str, file_path: &str) {
        self.used.insert(key.to_string());
        self.sources
            .entry(key.to_string())
            .or_default()
            .insert(file_path.to_string());
    }

    pub fn is_dynamic(&self, key: &str) -> bool {
        self.dynamic.contains(key)
    }

    /// Files a key was referenced from, in sorted order.
    pub fn files_for(&self, key: &str) -> Vec<String> {
        self.sources
            .get(key)
            .map(|files| files.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Scans source text for translation keys.
pub struct KeyExtractor<'a> {
    templates: &'a [CompiledTemplate],
}

impl<'a> KeyExtractor<'a> {
    pub fn new(templates: &'a [CompiledTemplate]) -> Self {
        Self { templates }
    }

    /// An extractor that only recognizes literal keys.
    pub fn literal_only() -> KeyExtractor<'static> {
        KeyExtractor { templates: &[] }
    }

    /// Read and scan every file. Unreadable files are recorded and skipped.
    pub fn extract_files<I, S>(&self, files: I) -> ExtractedKeys
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = ExtractedKeys::default();

        for file_path in files {
            let file_path = file_path.as_ref();
            match fs::read_to_string(file_path) {
                Ok(content) => {
                    self.extract_source(&content, file_path, &mut keys);
                    keys.files_scanned += 1;
                }
                Err(e) => {
                    tracing::warn!(path = file_path, "cannot read source file: {}", e);
                    keys.unreadable.push(UnreadableFile {
                        file_path: file_path.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            files = keys.files_scanned,
            used = keys.used.len(),
            dynamic = keys.dynamic.len(),
            "extracted translation keys"
        );

        keys
    }

    /// Scan one file's content, adding what it references to `keys`.
    pub fn extract_source(&self, content: &str, file_path: &str, keys: &mut ExtractedKeys) {
        let literal_regexes = [&*LITERAL_CALL_REGEX, &*HELPER_CALL_REGEX, &*DOTTED_LITERAL_REGEX];

        for re in literal_regexes {
            for cap in re.captures_iter(content) {
                let Some(candidate) = cap.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if is_valid_key(candidate) {
                    keys.add(candidate, file_path);
                }
            }
        }

        for template in self.templates {
            if !template.is_match(content) {
                continue;
            }
            tracing::debug!(
                path = file_path,
                pattern = template.pattern.as_str(),
                "matched dynamic key template"
            );
            for key in template.keys() {
                keys.add(key, file_path);
                keys.dynamic.insert(key.clone());
            }
        }
    }
}
