//! Unused translation key detection rule.
//!
//! Detects keys defined in locale files that no source file references.

use super::defining_languages;
use crate::{
    core::{analyze::AnalysisResult, locale::LocaleSet},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys(analysis: &AnalysisResult, locales: &LocaleSet) -> Vec<UnusedKeyIssue> {
    analysis
        .unused_keys
        .iter()
        .map(|key| {
            let (languages, file_path) = defining_languages(locales, key);
            UnusedKeyIssue {
                key: key.clone(),
                file_path,
                languages,
            }
        })
        .collect()
}
