//! Error types for the react-starter CLI.
//!
//! Most fallible paths use `anyhow::Result` with context attached at the
//! call site; this module defines the few typed variants that change how
//! `main` reports failures or which exit code it chooses.

use thiserror::Error;

/// Typed errors for react-starter operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// The yarn executable could not be found or did not answer a probe.
    #[error(
        "yarn not found in PATH.\n\n\
        yarn is required to install project dependencies. To install:\n  \
        - macOS: brew install yarn\n  \
        - Linux: npm install --global yarn\n  \
        - Windows: winget install Yarn.Yarn\n  \
        - Or visit: https://classic.yarnpkg.com/en/docs/install"
    )]
    YarnNotFound,

    /// The operator asked for npm, which this tool does not support.
    #[error("npm is not supported. Remove the --use-npm flag and use yarn instead.")]
    UnsupportedPackageManager,

    /// Exit with a specific code without printing another message.
    ///
    /// Used when a subprocess exits non-zero (its output already went to
    /// the terminal) and when a stage printed its own diagnostics, such as
    /// the directory conflict report.
    #[error("process exited with code {code}")]
    ProcessExitCode {
        /// The exit code to propagate.
        code: i32,
    },
}

impl CliError {
    /// Creates a new `ProcessExitCode` error.
    #[must_use]
    pub const fn process_exit_code(code: i32) -> Self {
        Self::ProcessExitCode { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yarn_not_found_mentions_installation() {
        let err = CliError::YarnNotFound;
        let message = err.to_string();
        assert!(message.contains("yarn not found in PATH"));
        assert!(message.contains("https://classic.yarnpkg.com"));
    }

    #[test]
    fn unsupported_package_manager_points_to_yarn() {
        let err = CliError::UnsupportedPackageManager;
        assert!(err.to_string().contains("use yarn instead"));
    }

    #[test]
    fn process_exit_code_displays_code() {
        let err = CliError::process_exit_code(42);
        assert_eq!(err.to_string(), "process exited with code 42");
    }
}
