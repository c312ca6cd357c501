//! Basic check: unused keys and keys some languages lack.
//!
//! Only literal keys are extracted, so keys built from dynamic templates
//! show up as unused here. `audit` is the template-aware variant.

use anyhow::{Ok, Result};

use super::{
    super::args::CheckCommand,
    helper::{finish, parse_error_issues},
    {CheckSummary, CommandResult, CommandSummary},
};
use crate::{
    core::{CheckContext, ExtractMode},
    issues::Issue,
    rules::{check_inconsistent_keys, check_unused_keys},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let extracted = ctx.extract(ExtractMode::Literal);
    let analysis = ctx.analyze(&extracted);

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(
        check_unused_keys(&analysis, &ctx.locales)
            .into_iter()
            .map(Issue::UnusedKey),
    );
    all_issues.extend(
        check_inconsistent_keys(&analysis, &ctx.locales)
            .into_iter()
            .map(Issue::InconsistentKey),
    );
    all_issues.extend(parse_error_issues(&ctx, &extracted));

    let summary = CheckSummary {
        missing_by_language: analysis.missing_by_language(),
    };

    let mut result = finish(
        CommandSummary::Check(summary),
        all_issues,
        ctx.files.len(),
        ctx.locales.len(),
        true,
    );
    result.exit_on_warnings = true;
    Ok(result)
}
