//! Toolchain invocation outcomes.
//!
//! [`ExecReport`] is the normalized result of a completed subprocess
//! (scaffold, dependency install); [`ValidationResult`] is the verdict of
//! the build-validation step. Both carry bounded diagnostic tails so that
//! a chatty toolchain cannot grow memory or log volume without limit.

use serde::{Deserialize, Serialize};

/// Upper bound on captured diagnostic output, in characters.
///
/// The last `DIAGNOSTIC_TAIL_CHARS` characters of combined output are
/// retained; earlier output is discarded during capture, not after.
pub const DIAGNOSTIC_TAIL_CHARS: usize = 1000;

/// Outcome of a completed toolchain subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecReport {
    /// Process exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Bounded tail of stdout.
    pub stdout_tail: String,
    /// Bounded tail of stderr.
    pub stderr_tail: String,
}

impl ExecReport {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The build-validation verdict for a generated project tree.
///
/// Every subprocess failure mode — nonzero exit, timeout, spawn error —
/// normalizes into this shape; build validation never propagates an error
/// past its boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    /// Exit code when the process ran to completion.
    pub exit_code: Option<i32>,
    /// Set when the build exceeded its timeout and was killed. Reported
    /// as a failure, but distinguished in the diagnostic message.
    pub timed_out: bool,
    /// Bounded tail of combined stdout/stderr, or the invocation error.
    pub diagnostic_tail: String,
}

impl ValidationResult {
    pub fn passed(exit_code: i32, diagnostic_tail: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(exit_code),
            timed_out: false,
            diagnostic_tail: diagnostic_tail.into(),
        }
    }

    pub fn failed(exit_code: Option<i32>, diagnostic_tail: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code,
            timed_out: false,
            diagnostic_tail: diagnostic_tail.into(),
        }
    }

    pub fn timeout(diagnostic_tail: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: None,
            timed_out: true,
            diagnostic_tail: diagnostic_tail.into(),
        }
    }

    /// Failure caused by the invocation itself (toolchain missing, spawn
    /// error) rather than by the build.
    pub fn invocation_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: None,
            timed_out: false,
            diagnostic_tail: message.into(),
        }
    }
}
