//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner` lists the source files
//! 2. `extract` turns their text into the used-key set
//! 3. `locale` loads one tree per language
//! 4. `analyze` diffs the two into missing, unused and inconsistent keys
//! 5. `repair` mutates the trees to fix what the analysis found
//!
//! `context` wires the steps together for the CLI.

pub mod analyze;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod locale;
pub mod repair;

pub use analyze::{AnalysisResult, analyze};
pub use context::{CheckContext, ExtractMode};
pub use extract::{ExtractedKeys, KeyExtractor};
pub use locale::{LocaleFile, LocaleSet};
