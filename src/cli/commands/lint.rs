use anyhow::Result;

use super::{
    helper::finish,
    {CommandKind, CommandResult, CommandSummary},
};
use crate::{
    cli::args::LintCommand,
    core::context::ProjectContext,
    issues::Issue,
    rules::{check_placeholder_mismatch_issues, check_template_syntax_issues},
};

pub fn lint(cmd: LintCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let run = ctx.extraction();
    let separator = &ctx.config.variant_separator;

    let mut issues = run.issues();
    issues.extend(
        check_template_syntax_issues(run, separator)
            .into_iter()
            .map(Issue::TemplateSyntax),
    );
    issues.extend(
        check_placeholder_mismatch_issues(run, &ctx.config.default_language, separator)
            .into_iter()
            .map(Issue::PlaceholderMismatch),
    );

    Ok(finish(
        CommandKind::Lint,
        CommandSummary::Lint,
        issues,
        ctx.files.len(),
        true,
    ))
}
