use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed, nothing to report
/// - `Failure` (1): Command completed but found issues, or a locale file
///   could not be written
/// - `Error` (2): Command could not run (invalid config, missing locales dir)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing to report.
    Success,
    /// Command completed but found issues or failed to save a file.
    Failure,
    /// Command could not run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        let failed = result.save_failures > 0
            || (result.exit_on_errors && result.error_count > 0)
            || (result.exit_on_warnings && result.warning_count > 0);
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
