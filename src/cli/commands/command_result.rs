use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Extract,
    Lint,
    Render,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Lint,
    Render(RenderSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Pretty-printed `{language: [entry, ...]}` document.
    pub json: String,
    /// File the document was written to; printed to stdout when `None`.
    pub output: Option<PathBuf>,
    pub entry_count: usize,
    pub language_count: usize,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running locstr commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of source files that could not be read.
    pub read_error_count: usize,
    /// Number of source files that were extracted.
    pub source_files_checked: usize,
}
