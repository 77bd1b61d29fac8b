use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of `locstr`.
///
/// - `Success` (0): nothing to report, or warnings only
/// - `Failure` (1): extraction or lint errors, or `init` found an existing config
/// - `Error` (2): the command could not run (bad config, bad arguments, render failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a command that ran to completion.
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
