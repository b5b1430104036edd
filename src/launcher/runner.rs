use std::process::{Command, ExitStatus};

use crate::error::{AppError, AppResult};
use crate::launcher::invocation::Invocation;

/// How the external program finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildExit {
    pub code: Option<i32>,
    pub detail: String,
}

impl ChildExit {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            detail: format!("exit status: {code}"),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            detail: status.to_string(),
        }
    }
}

/// Runs an [`Invocation`] to completion.
pub trait ExternalRunner {
    fn run(&self, invocation: &Invocation) -> AppResult<ChildExit>;
}

/// Spawns the program with inherited stdio and blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ExternalRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> AppResult<ChildExit> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()
            .map_err(|error| {
                AppError::Launch(format!(
                    "unable to start {}: {error}",
                    invocation.program.display()
                ))
            })?;

        Ok(ChildExit::from(status))
    }
}
