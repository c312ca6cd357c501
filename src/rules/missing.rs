//! Missing translation key detection rule.
//!
//! Detects keys referenced from source code that no locale file defines.

use crate::{
    core::{analyze::AnalysisResult, extract::ExtractedKeys},
    issues::MissingKeyIssue,
};

pub fn check_missing_keys(
    analysis: &AnalysisResult,
    extracted: &ExtractedKeys,
) -> Vec<MissingKeyIssue> {
    analysis
        .missing_keys
        .iter()
        .map(|key| MissingKeyIssue {
            key: key.clone(),
            files: extracted.files_for(key),
            dynamic: extracted.is_dynamic(key),
        })
        .collect()
}
