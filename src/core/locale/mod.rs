//! Locale store: loading, addressing, mutating and saving locale trees.
//!
//! ## Module Structure
//!
//! - `tree`: dot-path get/set/delete, flatten and prune on a single tree
//! - `store`: the per-language file set and its load/save cycle

pub mod store;
pub mod tree;

pub use store::{
    LocaleFile, LocaleSet, SaveOutcome, SaveReport, extract_language, load_all, save,
    to_pretty_json,
};
pub use tree::{
    contains, delete, flatten, flatten_entries, get, get_text, is_shape_conflict, prune_empty, set,
};
