//! Translate command - add placeholder values for keys locale files lack.
//!
//! By default targets keys used in source but defined nowhere; with
//! `--inconsistent`, keys defined in some languages but not others.
//! Values come from the static translation table or are marked
//! `[LANG] <source text>` for a translator to finish.
//!
//! Use `--execute` to write the locale files (default is dry-run mode).

use anyhow::{Ok, Result};

use super::{
    super::args::TranslateCommand,
    helper::{finish, parse_error_issues},
    {CommandResult, CommandSummary, TranslateSummary},
};
use crate::core::{
    CheckContext, ExtractMode,
    repair::{FillTarget, apply_fill, plan_fill},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let mut ctx = CheckContext::new(&cmd.common)?;

    let extracted = ctx.extract(ExtractMode::Dynamic);
    let analysis = ctx.analyze(&extracted);

    let target = if cmd.inconsistent {
        FillTarget::Inconsistent
    } else {
        FillTarget::Missing
    };
    let plan = plan_fill(target, &analysis, &ctx.locales, &ctx.placeholders());

    let saves = if cmd.execute && !plan.is_empty() {
        let added = apply_fill(&plan, &mut ctx.locales);
        tracing::debug!(added, "applied fill plan");
        Some(ctx.locales.save_changed())
    } else {
        None
    };

    let issues = parse_error_issues(&ctx, &extracted);

    Ok(finish(
        CommandSummary::Translate(TranslateSummary {
            plan,
            is_execute: cmd.execute,
            saves,
        }),
        issues,
        ctx.files.len(),
        ctx.locales.len(),
        false,
    ))
}
