//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translation entries as JSON
//! - `lint`: Report extraction problems and broken templates
//! - `render`: Evaluate a template or an extracted key with bindings
//! - `init`: Initialize the locstr configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Lint(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Language of unlabeled tables (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Key variant separator (overrides config file)
    #[arg(long)]
    pub variant_separator: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LintCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Template to evaluate, e.g. "{N_PLURAL:{N} file|{N} files}"
    #[arg(required_unless_present = "key", conflicts_with = "key")]
    pub template: Option<String>,

    /// Render the extracted entry with this key instead of a template
    #[arg(short, long)]
    pub key: Option<String>,

    /// Variant tag of the key (default variant when omitted)
    #[arg(long, requires = "key")]
    pub variant: Option<String>,

    /// Binding as NAME=VALUE; integers bind numbers, anything else text
    #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE")]
    pub bindings: Vec<String>,

    /// Language whose plural rule and table are used (default: the default language)
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from Go and JavaScript sources as JSON
    Extract(ExtractCommand),
    /// Check extracted strings for duplicate keys, broken templates and placeholder mismatches
    Lint(LintCommand),
    /// Render a template, or an extracted key, with bindings
    Render(RenderCommand),
    /// Initialize a new .locstrrc.json configuration file
    Init,
}
