use std::collections::BTreeMap;

use crate::core::locale::{LocaleSet, get};

/// Per-language result of deleting unused keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteStats {
    pub deleted: usize,
    pub not_found: usize,
    /// Keys naming a whole section in this language, left in place.
    pub kept: usize,
}

/// Delete every key in `unused` from each language, then prune containers
/// the deletions left empty.
///
/// A key that is a string in one language may be a section in another. The
/// section holds other keys, so it is never deleted.
pub fn delete_unused(locales: &mut LocaleSet, unused: &[String]) -> BTreeMap<String, DeleteStats> {
    let mut stats = BTreeMap::new();

    for (language, file) in locales.files.iter_mut() {
        let mut lang_stats = DeleteStats::default();
        for key in unused {
            if get(&file.tree, key).is_some_and(|value| value.is_object()) {
                tracing::warn!(
                    language = language.as_str(),
                    key = key.as_str(),
                    "not deleting key that names a section"
                );
                lang_stats.kept += 1;
            } else if file.delete(key) {
                lang_stats.deleted += 1;
            } else {
                lang_stats.not_found += 1;
            }
        }
        file.prune_empty();

        tracing::debug!(
            language = language.as_str(),
            deleted = lang_stats.deleted,
            not_found = lang_stats.not_found,
            kept = lang_stats.kept,
            "deleted unused keys"
        );
        stats.insert(language.clone(), lang_stats);
    }

    stats
}
