//! Corrective mutations on locale trees.
//!
//! - `delete_unused`: remove keys nothing references, pruning emptied objects
//! - `fill`: add placeholder values for missing or inconsistent keys
//! - `placeholder`: the values written by `fill`
//!
//! Nothing here touches the disk. Callers decide whether to save through
//! [`LocaleSet::save_changed`](crate::core::locale::LocaleSet::save_changed).

pub mod delete_unused;
pub mod fill;
pub mod placeholder;

pub use delete_unused::{DeleteStats, delete_unused};
pub use fill::{FillPlan, FillTarget, PlannedKey, apply_fill, plan_fill};
pub use placeholder::{Placeholders, TranslationTable, default_translations, should_skip_key};
