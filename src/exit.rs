// src/exit.rs
//! Standardized process exit codes for `seeker`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SeekerExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (malformed catalog, bad filter, unknown id).
    InvalidInput = 2,
    /// Catalog loaded but has dangling relationship edges.
    IntegrityWarning = 3,
}

impl SeekerExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for SeekerExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for SeekerExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                if e.downcast_ref::<crate::error::SeekerError>().is_some_and(is_input_error) {
                    Self::InvalidInput
                } else {
                    Self::Error
                }
            }
        }
    }
}

fn is_input_error(e: &crate::error::SeekerError) -> bool {
    use crate::error::SeekerError as E;
    matches!(
        e,
        E::Json { .. }
            | E::DuplicateId(_)
            | E::UnknownResource(_)
            | E::InvalidFilter(_)
            | E::Regex(_)
            | E::InvalidConfig(_)
            | E::Toml(_)
    )
}
