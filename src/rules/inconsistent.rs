//! Inconsistent translation key detection rule.
//!
//! Detects keys that exist in at least one locale file but not in all of
//! them.

use super::defining_languages;
use crate::{
    core::{analyze::AnalysisResult, locale::LocaleSet},
    issues::InconsistentKeyIssue,
};

pub fn check_inconsistent_keys(
    analysis: &AnalysisResult,
    locales: &LocaleSet,
) -> Vec<InconsistentKeyIssue> {
    analysis
        .inconsistent_keys
        .iter()
        .map(|(key, missing_in)| {
            let (present_in, file_path) = defining_languages(locales, key);
            InconsistentKeyIssue {
                key: key.clone(),
                file_path,
                missing_in: missing_in.clone(),
                present_in,
            }
        })
        .collect()
}
