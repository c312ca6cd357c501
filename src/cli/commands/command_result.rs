use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    core::{
        locale::SaveReport,
        repair::{DeleteStats, FillPlan},
    },
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Audit(AuditSummary),
    Translate(TranslateSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Keys each language lacks that another language defines.
    pub missing_by_language: BTreeMap<String, Vec<String>>,
}

#[derive(Debug)]
pub struct AuditSummary {
    /// Keys referenced from source, dynamic ones included.
    pub used_count: usize,
    pub dynamic_count: usize,
    /// Keys defined in at least one locale file.
    pub defined_count: usize,
    pub languages: Vec<String>,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub plan: FillPlan,
    pub is_execute: bool,
    /// Present only when `--execute` wrote something.
    pub saves: Option<SaveReport>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub unused_keys: Vec<String>,
    /// Locale files defining at least one unused key.
    pub file_count: usize,
    pub is_execute: bool,
    pub stats: BTreeMap<String, DeleteStats>,
    pub saves: Option<SaveReport>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Result of running an i18n-sweep command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit 1 when error_count > 0.
    pub exit_on_errors: bool,
    /// If true, exit 1 when warning_count > 0.
    pub exit_on_warnings: bool,
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Locale files that could not be written. Always fails the run.
    pub save_failures: usize,
    pub source_files_checked: usize,
    pub locale_files_checked: usize,
}
