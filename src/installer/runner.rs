//! Command execution seam for the dependency installer.
//!
//! The installer never spawns processes directly: it goes through the
//! [`CommandRunner`] trait so tests can inject scripted fakes and assert
//! on the exact invocation sequence without touching the host system.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Exit status of a completed child process.
///
/// A small owned mirror of `std::process::ExitStatus` so fake runners can
/// construct arbitrary outcomes in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    success: bool,
    code: Option<i32>,
}

impl CommandStatus {
    /// Creates a status from raw parts.
    #[must_use]
    pub const fn new(success: bool, code: Option<i32>) -> Self {
        Self { success, code }
    }

    /// Returns true if the process exited successfully.
    #[must_use]
    pub const fn success(self) -> bool {
        self.success
    }

    /// Returns the exit code, if the process exited normally.
    #[must_use]
    pub const fn code(self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::new(status.success(), status.code())
    }
}

/// Runs external commands on behalf of the installer.
pub trait CommandRunner {
    /// Runs `program` with `args` in `cwd` to completion, streaming its
    /// output to the calling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned; a non-zero exit
    /// is reported through the returned status, not as an error.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandStatus>;

    /// Runs a quiet `--version` probe for `program`, discarding all
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be found or spawned.
    fn probe(&self, program: &str) -> Result<CommandStatus>;
}

/// Production runner backed by `std::process::Command`.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandStatus> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to execute {program}"))?;

        Ok(status.into())
    }

    fn probe(&self, program: &str) -> Result<CommandStatus> {
        let resolved = which::which(program)
            .with_context(|| format!("{program} executable not found in PATH"))?;

        let status = Command::new(resolved)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to execute {program}"))?;

        Ok(status.into())
    }
}
