use std::collections::BTreeSet;

use serde_json::Value;

use super::placeholder::{Placeholders, should_skip_key};
use crate::core::{
    analyze::AnalysisResult,
    locale::{LocaleSet, contains, is_shape_conflict},
};

/// Which keys a fill pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTarget {
    /// Keys used in source but defined in no locale.
    Missing,
    /// Keys defined in some locales but not all.
    Inconsistent,
}

/// Values to add for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedKey {
    pub key: String,
    /// `(language, value)` pairs, in language order.
    pub additions: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPlan {
    pub target: FillTarget,
    pub entries: Vec<PlannedKey>,
    /// Missing keys left alone because they look like dynamic content.
    pub skipped: Vec<String>,
    /// `(key, language)` pairs left alone because the key is a string in one
    /// language and a section in another.
    pub conflicts: Vec<(String, String)>,
}

impl FillPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn addition_count(&self) -> usize {
        self.entries.iter().map(|e| e.additions.len()).sum()
    }

    pub fn languages(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.additions.iter().map(|(lang, _)| lang.as_str()))
            .collect()
    }
}

/// Work out every value a fill pass would write, without touching the trees.
pub fn plan_fill(
    target: FillTarget,
    analysis: &AnalysisResult,
    locales: &LocaleSet,
    placeholders: &Placeholders<'_>,
) -> FillPlan {
    let mut plan = FillPlan {
        target,
        entries: Vec::new(),
        skipped: Vec::new(),
        conflicts: Vec::new(),
    };

    let candidates: Vec<(&String, Vec<&str>)> = match target {
        FillTarget::Missing => analysis
            .missing_keys
            .iter()
            .map(|key| {
                let lacking = locales
                    .trees()
                    .filter(|(_, tree)| !contains(tree, key))
                    .map(|(lang, _)| lang)
                    .collect();
                (key, lacking)
            })
            .collect(),
        FillTarget::Inconsistent => analysis
            .inconsistent_keys
            .iter()
            .map(|(key, langs)| (key, langs.iter().map(String::as_str).collect()))
            .collect(),
    };

    for (key, lacking) in candidates {
        if target == FillTarget::Missing && should_skip_key(key) {
            tracing::info!(key = key.as_str(), "skipping key that looks like dynamic content");
            plan.skipped.push(key.clone());
            continue;
        }

        let source = placeholders.source_value(key, locales);
        let additions: Vec<(String, String)> = lacking
            .into_iter()
            .filter(|lang| {
                let conflict = locales
                    .get(lang)
                    .is_some_and(|file| is_shape_conflict(&file.tree, key));
                if conflict {
                    tracing::warn!(
                        key = key.as_str(),
                        language = *lang,
                        "not filling key that would overwrite a section or a string"
                    );
                    plan.conflicts.push((key.clone(), lang.to_string()));
                }
                !conflict
            })
            .map(|lang| {
                (
                    lang.to_string(),
                    placeholders.value_for(key, lang, source.as_deref()),
                )
            })
            .collect();

        if !additions.is_empty() {
            plan.entries.push(PlannedKey {
                key: key.clone(),
                additions,
            });
        }
    }

    plan
}

/// Write every planned value into its locale tree. Returns the number of
/// values set.
pub fn apply_fill(plan: &FillPlan, locales: &mut LocaleSet) -> usize {
    let mut applied = 0;

    for entry in &plan.entries {
        for (lang, value) in &entry.additions {
            let Some(file) = locales.get_mut(lang) else {
                tracing::warn!(language = lang.as_str(), "no locale file for planned value");
                continue;
            };
            file.set(&entry.key, Value::String(value.clone()));
            applied += 1;
        }
    }

    applied
}
