//! i18n-sweep - keeps JSON locale files in sync with a JS/TS codebase
//!
//! i18n-sweep scans source files for translation keys, compares them with the
//! per-language JSON locale files, and reports or repairs the differences:
//! keys used but never defined, keys some languages lack, and keys nothing
//! uses any more.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, locale store, analysis and repair
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic output setup
//! - `rules`: Turn analysis results into issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
pub mod utils;
