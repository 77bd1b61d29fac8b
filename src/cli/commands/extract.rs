use std::fs;

use anyhow::{Context, Result};

use super::{
    helper::finish,
    {CommandKind, CommandResult, CommandSummary, ExtractSummary},
};
use crate::{cli::args::ExtractCommand, core::context::ProjectContext};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let run = ctx.extraction();

    let json = serde_json::to_string_pretty(&run.tables)
        .context("Failed to serialize extracted entries")?;
    if let Some(ref path) = cmd.output {
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let summary = ExtractSummary {
        json,
        output: cmd.output,
        entry_count: run.entry_count(),
        language_count: run.tables.len(),
    };
    Ok(finish(
        CommandKind::Extract,
        CommandSummary::Extract(summary),
        run.issues(),
        ctx.files.len(),
        true,
    ))
}
