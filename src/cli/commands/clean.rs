use anyhow::{Ok, Result};

use super::{
    super::args::CleanCommand,
    helper::{finish, parse_error_issues},
    {CleanSummary, CommandResult, CommandSummary},
};
use crate::core::{
    CheckContext, ExtractMode,
    locale::contains,
    repair::delete_unused,
};

/// Delete keys no source file references.
///
/// Extraction expands dynamic templates so template-generated keys are
/// never treated as unused.
pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let mut ctx = CheckContext::new(&cmd.common)?;

    let extracted = ctx.extract(ExtractMode::Dynamic);
    let analysis = ctx.analyze(&extracted);
    let unused_keys = analysis.unused_keys;

    let file_count = ctx
        .locales
        .trees()
        .filter(|(_, tree)| unused_keys.iter().any(|key| contains(tree, key)))
        .count();

    let (stats, saves) = if cmd.execute && !unused_keys.is_empty() {
        let stats = delete_unused(&mut ctx.locales, &unused_keys);
        (stats, Some(ctx.locales.save_changed()))
    } else {
        Default::default()
    };

    let issues = parse_error_issues(&ctx, &extracted);

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            unused_keys,
            file_count,
            is_execute: cmd.execute,
            stats,
            saves,
        }),
        issues,
        ctx.files.len(),
        ctx.locales.len(),
        false,
    ))
}
