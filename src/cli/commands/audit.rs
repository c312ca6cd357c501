use anyhow::{Ok, Result};

use super::{
    super::args::AuditCommand,
    helper::{finish, parse_error_issues},
    {AuditSummary, CommandResult, CommandSummary},
};
use crate::{
    core::{CheckContext, ExtractMode},
    issues::Issue,
    rules::{check_inconsistent_keys, check_missing_keys, check_unused_keys},
};

/// Full consistency audit with dynamic key expansion.
///
/// Missing and inconsistent keys are errors. Unused keys are only warnings
/// since a key may be referenced in a way the scanner cannot see.
pub fn audit(cmd: AuditCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let extracted = ctx.extract(ExtractMode::Dynamic);
    let analysis = ctx.analyze(&extracted);

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(
        check_missing_keys(&analysis, &extracted)
            .into_iter()
            .map(Issue::MissingKey),
    );
    all_issues.extend(
        check_inconsistent_keys(&analysis, &ctx.locales)
            .into_iter()
            .map(Issue::InconsistentKey),
    );
    all_issues.extend(
        check_unused_keys(&analysis, &ctx.locales)
            .into_iter()
            .map(Issue::UnusedKey),
    );
    all_issues.extend(parse_error_issues(&ctx, &extracted));

    let summary = AuditSummary {
        used_count: extracted.used.len(),
        dynamic_count: extracted.dynamic.len(),
        defined_count: analysis.universe_size,
        languages: ctx.locales.languages().into_iter().map(String::from).collect(),
    };

    Ok(finish(
        CommandSummary::Audit(summary),
        all_issues,
        ctx.files.len(),
        ctx.locales.len(),
        true,
    ))
}
