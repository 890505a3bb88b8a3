//! Exit codes following sysexits.h conventions.
//!
//! These codes let scripts tell a fake verdict apart from a broken
//! invocation or an unreadable input.

use newscheck_core::VerificationResult;

/// Successful execution (authentic or uncertain verdict).
pub const SUCCESS: i32 = 0;

/// General error (catch-all).
pub const GENERAL_ERROR: i32 = 1;

/// Command line usage error (invalid arguments).
/// Maps to EX_USAGE from sysexits.h.
pub const USAGE_ERROR: i32 = 64;

/// Content was judged fake.
/// Maps to EX_DATAERR from sysexits.h.
pub const VERDICT_FAKE: i32 = 65;

/// Cannot open or read an input file.
/// Maps to EX_NOINPUT from sysexits.h.
pub const INPUT_ERROR: i32 = 66;

/// Represents an exit code with optional error context.
#[derive(Debug)]
pub struct ExitCode {
    pub code: i32,
    pub message: Option<String>,
}

impl ExitCode {
    pub const fn success() -> Self {
        Self {
            code: SUCCESS,
            message: None,
        }
    }

    /// Exit status for a completed verification.
    pub fn from_result(result: VerificationResult) -> Self {
        let code = match result {
            VerificationResult::Fake => VERDICT_FAKE,
            VerificationResult::Authentic | VerificationResult::Uncertain => SUCCESS,
        };
        Self {
            code,
            message: None,
        }
    }

    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");

        // Anything that bottoms out in an I/O error is an input problem
        let code = if err
            .chain()
            .any(|cause| cause.downcast_ref::<std::io::Error>().is_some())
        {
            INPUT_ERROR
        } else {
            GENERAL_ERROR
        };

        Self {
            code,
            message: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_fake_verdict_exit_code() {
        assert_eq!(
            ExitCode::from_result(VerificationResult::Fake).code,
            VERDICT_FAKE
        );
        assert_eq!(
            ExitCode::from_result(VerificationResult::Uncertain).code,
            SUCCESS
        );
        assert_eq!(
            ExitCode::from_result(VerificationResult::Authentic).code,
            SUCCESS
        );
    }

    #[test]
    fn test_io_errors_are_input_errors() {
        let err = std::fs::read_to_string("/definitely/not/here")
            .context("Failed to read file")
            .unwrap_err();
        let exit = ExitCode::from_anyhow(&err);
        assert_eq!(exit.code, INPUT_ERROR);
        assert!(exit.message.unwrap().starts_with("Failed to read file"));
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("Failed to parse articles file");
        assert_eq!(ExitCode::from_anyhow(&err).code, GENERAL_ERROR);
    }
}
