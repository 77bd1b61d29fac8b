use anyhow::{Context, Result, bail};

use super::{
    helper::finish,
    {CommandKind, CommandResult, CommandSummary, RenderSummary},
};
use crate::{
    cli::args::RenderCommand,
    config::load_config,
    core::context::ProjectContext,
    runtime::render_template,
    template::{Bindings, Value},
};

pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let bindings = parse_bindings(&cmd.bindings)?;

    let text = match (&cmd.template, &cmd.key) {
        (Some(template), _) => {
            let root = cmd
                .common
                .source_root
                .clone()
                .unwrap_or_else(|| ".".into());
            let config = load_config(&root)?.config;
            let language = cmd
                .lang
                .as_deref()
                .or(cmd.common.default_language.as_deref())
                .unwrap_or(&config.default_language);
            render_template(template, &bindings, config.plural_rules().rule_for(language))?
        }
        (None, Some(key)) => {
            let ctx = ProjectContext::new(&cmd.common)?;
            let catalog = ctx.extraction().catalog(&ctx.config);
            let language = cmd.lang.as_deref().unwrap_or(&ctx.config.default_language);
            catalog
                .render(language, key, cmd.variant.as_deref(), &bindings)?
        }
        (None, None) => bail!("Either a template or --key is required"),
    };

    Ok(finish(
        CommandKind::Render,
        CommandSummary::Render(RenderSummary { text }),
        Vec::new(),
        0,
        true,
    ))
}

/// Parse `NAME=VALUE` arguments into bindings.
pub fn parse_bindings(args: &[String]) -> Result<Bindings> {
    args.iter()
        .map(|arg| {
            let (name, value) = arg
                .split_once('=')
                .with_context(|| format!("Invalid binding \"{}\", expected NAME=VALUE", arg))?;
            if name.is_empty() {
                bail!("Invalid binding \"{}\", the name is empty", arg);
            }
            Ok((name.to_string(), Value::parse_arg(value)))
        })
        .collect()
}
