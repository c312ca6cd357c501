//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style. Repair commands print what they would
//! change (dry-run) or what they changed, followed by a per-file save tally.
//! Everything here writes to stdout except the parse warning, which goes to
//! stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    AuditSummary, CheckSummary, CleanSummary, CommandResult, CommandSummary, InitSummary,
    TranslateSummary,
};
use crate::{
    core::{
        locale::{SaveOutcome, SaveReport},
        repair::FillTarget,
    },
    issues::{Issue, Report, Severity},
    utils::truncate_to_width,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Longest value preview shown per planned addition.
const MAX_VALUE_WIDTH: usize = 48;

/// Maximum number of skipped keys listed by name.
const MAX_SKIPPED_DISPLAY: usize = 5;

/// Print issues in cargo-style format, followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, locale_files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} locale {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be read or parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    print_command_output(result, verbose, &mut out);
    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.location());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn print_command_output<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            report_to(&result.issues, writer);
            print_missing_by_language(summary, writer);
            if result.issues.is_empty() {
                print_success_to(
                    result.source_files_checked,
                    result.locale_files_checked,
                    writer,
                );
            }
        }
        CommandSummary::Audit(summary) => {
            print_audit(summary, result, writer);
        }
        CommandSummary::Translate(summary) => {
            if verbose {
                report_to(&result.issues, writer);
            }
            print_translate(summary, writer);
        }
        CommandSummary::Clean(summary) => {
            if verbose {
                report_to(&result.issues, writer);
            }
            print_clean(summary, writer);
        }
        CommandSummary::Init(summary) => {
            print_init(summary, writer);
        }
    }
}

fn print_missing_by_language<W: Write>(summary: &CheckSummary, writer: &mut W) {
    if summary.missing_by_language.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Missing translations by language:".bold());
    for (language, keys) in &summary.missing_by_language {
        let _ = writeln!(writer, "  {}: {} key(s)", language, keys.len());
    }
}

fn print_audit<W: Write>(summary: &AuditSummary, result: &CommandResult, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} source file(s): {} key(s) used ({} from dynamic templates), {} defined across {} language(s) [{}]",
        result.source_files_checked,
        summary.used_count,
        summary.dynamic_count,
        summary.defined_count,
        summary.languages.len(),
        summary.languages.join(", ")
    );
    let _ = writeln!(writer);

    report_to(&result.issues, writer);
    if result.issues.is_empty() {
        print_success_to(
            result.source_files_checked,
            result.locale_files_checked,
            writer,
        );
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    let plan = &summary.plan;

    if !plan.skipped.is_empty() {
        let shown: Vec<&str> = plan
            .skipped
            .iter()
            .take(MAX_SKIPPED_DISPLAY)
            .map(String::as_str)
            .collect();
        let more = plan.skipped.len().saturating_sub(MAX_SKIPPED_DISPLAY);
        let _ = writeln!(
            writer,
            "{} skipped {} key(s) that look like dynamic content: {}{}",
            "note:".bold(),
            plan.skipped.len(),
            shown.join(", "),
            if more > 0 {
                format!(" (and {} more)", more)
            } else {
                String::new()
            }
        );
    }

    if !plan.conflicts.is_empty() {
        let shown: Vec<String> = plan
            .conflicts
            .iter()
            .take(MAX_SKIPPED_DISPLAY)
            .map(|(key, language)| format!("{} ({})", key, language))
            .collect();
        let more = plan.conflicts.len().saturating_sub(MAX_SKIPPED_DISPLAY);
        let _ = writeln!(
            writer,
            "{} left {} value(s) alone where a key is a string in one language and a section in another: {}{}",
            "note:".bold(),
            plan.conflicts.len(),
            shown.join(", "),
            if more > 0 {
                format!(" (and {} more)", more)
            } else {
                String::new()
            }
        );
    }

    if plan.is_empty() {
        let what = match plan.target {
            FillTarget::Missing => "missing",
            FillTarget::Inconsistent => "inconsistent",
        };
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No {} keys to translate", what).green()
        );
        return;
    }

    if !summary.is_execute {
        for entry in &plan.entries {
            let _ = writeln!(writer, "{}", entry.key.bold());
            for (language, value) in &entry.additions {
                let _ = writeln!(
                    writer,
                    "  {} {}: \"{}\"",
                    "+".green(),
                    language,
                    truncate_to_width(value, MAX_VALUE_WIDTH)
                );
            }
        }
        let _ = writeln!(writer);
    }

    let verb = if summary.is_execute {
        "Added".green().bold()
    } else {
        "Would add".yellow().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} value(s) for {} key(s) in {} locale file(s).",
        verb,
        plan.addition_count(),
        plan.entries.len(),
        plan.languages().len()
    );

    match &summary.saves {
        Some(saves) => print_save_report(saves, writer),
        None if !summary.is_execute => {
            let _ = writeln!(
                writer,
                "Run with {} to write these values.",
                "--execute".cyan()
            );
        }
        None => {}
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.unused_keys.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused keys to delete".green()
        );
        return;
    }

    if summary.is_execute {
        let deleted: usize = summary.stats.values().map(|s| s.deleted).sum();
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s) (processed {} unused key(s)).",
            "Deleted".green().bold(),
            deleted,
            summary.file_count,
            summary.unused_keys.len()
        );
        for (language, stats) in &summary.stats {
            let kept = if stats.kept > 0 {
                format!(", {} kept (section in this language)", stats.kept)
            } else {
                String::new()
            };
            let _ = writeln!(
                writer,
                "  - {}: {} deleted, {} not found{}",
                language, stats.deleted, stats.not_found, kept
            );
        }
    } else {
        for key in &summary.unused_keys {
            let _ = writeln!(writer, "  {} {}", "-".red(), key);
        }
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s).",
            "Would delete".yellow().bold(),
            summary.unused_keys.len(),
            summary.file_count
        );
        let _ = writeln!(
            writer,
            "Run with {} to delete these keys.",
            "--execute".cyan()
        );
    }

    if let Some(saves) = &summary.saves {
        print_save_report(saves, writer);
    }
}

fn print_save_report<W: Write>(saves: &SaveReport, writer: &mut W) {
    for (language, outcome) in &saves.outcomes {
        let _ = match outcome {
            SaveOutcome::Saved => {
                writeln!(writer, "  {} saved {}.json", SUCCESS_MARK.green(), language)
            }
            SaveOutcome::Failed(reason) => writeln!(
                writer,
                "  {} failed to save {}.json: {}",
                FAILURE_MARK.red(),
                language,
                reason
            ),
            SaveOutcome::Skipped(reason) => writeln!(
                writer,
                "  {} skipped {}.json: {}",
                FAILURE_MARK.red(),
                language,
                reason
            ),
        };
    }

    let failed = saves.failed_count();
    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} of {} locale file(s) could not be written",
            "error:".bold().red(),
            failed,
            saves.outcomes.len()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

// ============================================================
// Tests
// ============================================================
