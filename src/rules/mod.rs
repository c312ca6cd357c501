//! Rule implementations.
//!
//! Pure functions turning analysis results into reportable issues. Each
//! takes only the inputs it needs and returns one issue type, sorted by key.
//!
//! ## Module Structure
//!
//! - `missing`: keys used in source but defined nowhere
//! - `inconsistent`: keys defined in some languages but not all
//! - `unused`: keys defined but never referenced
//! - `parse_error`: unreadable source files and unloadable locale files

pub mod inconsistent;
pub mod missing;
pub mod parse_error;
pub mod unused;

pub use inconsistent::check_inconsistent_keys;
pub use missing::check_missing_keys;
pub use parse_error::check_parse_errors;
pub use unused::check_unused_keys;

use crate::core::locale::{LocaleSet, contains};

/// Languages defining `key`, and the path of the first file defining it.
fn defining_languages(locales: &LocaleSet, key: &str) -> (Vec<String>, String) {
    let languages: Vec<String> = locales
        .trees()
        .filter(|(_, tree)| contains(tree, key))
        .map(|(lang, _)| lang.to_string())
        .collect();

    let file_path = languages
        .first()
        .and_then(|lang| locales.get(lang))
        .map(|file| file.path.to_string_lossy().into_owned())
        .unwrap_or_else(|| locales.dir.to_string_lossy().into_owned());

    (languages, file_path)
}
