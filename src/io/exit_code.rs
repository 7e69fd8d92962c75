//! Process exit codes.

/// Exit codes reported to the shell.
///
/// Stable contract for scripts: `0` means a result was printed, `2` means
/// the input could not be parsed, `1` covers everything else (config load
/// failures and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 2,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
