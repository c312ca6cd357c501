//! Consistency analysis between the used-key set and the locale files.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::locale::flatten;

/// Result of comparing used keys against every loaded locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Keys used in source but defined in no locale, sorted.
    pub missing_keys: Vec<String>,
    /// Keys defined in some locale but never used in source, sorted.
    pub unused_keys: Vec<String>,
    /// Keys defined in some but not all locales, mapped to the languages
    /// lacking them.
    pub inconsistent_keys: BTreeMap<String, Vec<String>>,
    /// Number of distinct keys across all locales.
    pub universe_size: usize,
}

impl AnalysisResult {
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty() && self.unused_keys.is_empty() && !self.has_inconsistent()
    }

    pub fn has_inconsistent(&self) -> bool {
        !self.inconsistent_keys.is_empty()
    }

    /// Missing or inconsistent keys are errors; unused keys are not.
    pub fn has_errors(&self) -> bool {
        !self.missing_keys.is_empty() || self.has_inconsistent()
    }

    /// Regroup the inconsistent keys by the language lacking them.
    pub fn missing_by_language(&self) -> BTreeMap<String, Vec<String>> {
        let mut by_language: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, languages) in &self.inconsistent_keys {
            for language in languages {
                by_language
                    .entry(language.clone())
                    .or_default()
                    .push(key.clone());
            }
        }
        by_language
    }
}

/// Compute missing, unused and inconsistent keys.
///
/// `trees` yields `(language, tree)` pairs. Missing languages are listed in
/// the order the pairs are given.
pub fn analyze<'a, I>(used: &BTreeSet<String>, trees: I) -> AnalysisResult
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let per_language: Vec<(&str, BTreeSet<String>)> = trees
        .into_iter()
        .map(|(language, tree)| (language, flatten(tree)))
        .collect();

    let universe: BTreeSet<&String> = per_language
        .iter()
        .flat_map(|(_, keys)| keys.iter())
        .collect();

    let missing_keys = used
        .iter()
        .filter(|key| !universe.contains(key))
        .cloned()
        .collect();

    let unused_keys = universe
        .iter()
        .filter(|key| !used.contains(key.as_str()))
        .map(|key| key.to_string())
        .collect();

    let mut inconsistent_keys = BTreeMap::new();
    for key in &universe {
        let lacking: Vec<String> = per_language
            .iter()
            .filter(|(_, keys)| !keys.contains(*key))
            .map(|(language, _)| language.to_string())
            .collect();

        if !lacking.is_empty() && lacking.len() < per_language.len() {
            inconsistent_keys.insert(key.to_string(), lacking);
        }
    }

    AnalysisResult {
        missing_keys,
        unused_keys,
        inconsistent_keys,
        universe_size: universe.len(),
    }
}
