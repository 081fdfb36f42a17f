// src/exit.rs
//! Standardized process exit codes for `biograph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BiographExit {
    /// Operation completed successfully (or a missing input was reported in lenient mode).
    Success = 0,
    /// Generic error (e.g. IO, write failure).
    Error = 1,
    /// Input validation failed (malformed line, unknown target, bad parameter).
    InvalidInput = 2,
    /// A required input file is absent and `--strict` was given.
    MissingInput = 3,
}

impl BiographExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for BiographExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
