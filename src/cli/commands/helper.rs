use super::{CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, ExtractedKeys},
    issues::{Issue, Severity},
    rules::check_parse_errors,
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    let save_failures = match &summary {
        CommandSummary::Translate(s) => s.saves.as_ref().map_or(0, |r| r.failed_count()),
        CommandSummary::Clean(s) => s.saves.as_ref().map_or(0, |r| r.failed_count()),
        _ => 0,
    };

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        exit_on_warnings: false,
        issues,
        parse_error_count,
        save_failures,
        source_files_checked,
        locale_files_checked,
    }
}

/// Parse-error issues for unreadable sources and degraded locale files.
pub fn parse_error_issues(ctx: &CheckContext, extracted: &ExtractedKeys) -> Vec<Issue> {
    check_parse_errors(extracted, &ctx.locales)
        .into_iter()
        .map(Issue::ParseError)
        .collect()
}
