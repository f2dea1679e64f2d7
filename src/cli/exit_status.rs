use std::process::ExitCode;

/// How a `locale-sync` run ended.
///
/// - `Success` (0): every locale's generated module is current, rebuilt or not
/// - `Failure` (1): a target locale has no XLIFF file, so nothing was rebuilt
/// - `Error` (2): the run could not complete (bad config, regeneration failed)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Generated modules are up-to-date.
    Success,
    /// An XLIFF translation source is missing.
    Failure,
    /// Config lookup or regeneration went wrong.
    Error,
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
