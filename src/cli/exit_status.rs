use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Run completed; every matched file was processed
/// - `Error` (1): Run aborted on a scan, strip, or config failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed; every matched file was processed.
    Success,
    /// Run aborted on a scan, strip, or config failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
