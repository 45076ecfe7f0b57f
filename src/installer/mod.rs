//! Dependency installation via yarn.
//!
//! A strictly ordered pipeline of yarn invocations: probe, lockfile
//! initialization, install, then the build-tool and UI-framework package
//! additions. Later steps depend on the lockfile state established by
//! earlier ones, so nothing runs in parallel and the first failure stops
//! the sequence. There is no retry and no fallback package manager.

pub mod runner;

pub use runner::{CommandRunner, CommandStatus, ShellRunner};

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::errors::CliError;

/// Build-tool packages added as development dependencies: the transpiler
/// core, the bundler-transpiler bridge, both presets, the register hook,
/// and the bundler with its CLI, dev server, and HTML plugin.
pub const DEV_DEPENDENCIES: &[&str] = &[
    "@babel/core",
    "babel-loader",
    "@babel/preset-env",
    "@babel/preset-react",
    "@babel/register",
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
    "html-webpack-plugin",
];

/// UI-framework packages added as runtime dependencies.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["react", "react-dom"];

/// The package-manager executable. Versionless: whatever yarn resolves on
/// PATH is used.
const PACKAGE_MANAGER: &str = "yarn";

/// Verifies that yarn is present and answers a version query.
///
/// # Errors
///
/// Returns [`CliError::YarnNotFound`] if the probe cannot run or reports
/// failure. There is no fallback package manager.
pub fn ensure_yarn_available(runner: &dyn CommandRunner) -> Result<()> {
    match runner.probe(PACKAGE_MANAGER) {
        Ok(status) if status.success() => Ok(()),
        Ok(_) | Err(_) => Err(CliError::YarnNotFound.into()),
    }
}

/// Installs all project dependencies into `root`.
///
/// Runs, in order: `yarn init --yes`, `yarn install`,
/// `yarn add <build tools> --dev`, `yarn add react react-dom`. Each step
/// inherits the terminal's stdio so the operator sees live output.
///
/// # Errors
///
/// Returns [`CliError::YarnNotFound`] if the probe fails, or propagates
/// the exit code of the first failing step.
pub fn install_dependencies(root: &Path, runner: &dyn CommandRunner) -> Result<()> {
    ensure_yarn_available(runner)?;

    run_step(runner, root, &["init", "--yes"])?;
    run_step(runner, root, &["install"])?;

    let mut add_dev: Vec<&str> = vec!["add"];
    add_dev.extend_from_slice(DEV_DEPENDENCIES);
    add_dev.push("--dev");
    run_step(runner, root, &add_dev)?;

    let mut add_runtime: Vec<&str> = vec!["add"];
    add_runtime.extend_from_slice(RUNTIME_DEPENDENCIES);
    run_step(runner, root, &add_runtime)?;

    Ok(())
}

/// Runs a single yarn step, propagating a non-zero exit code.
fn run_step(runner: &dyn CommandRunner, root: &Path, args: &[&str]) -> Result<()> {
    debug!("Running yarn {}", args.join(" "));

    let status = runner.run(PACKAGE_MANAGER, args, root)?;
    if status.success() {
        return Ok(());
    }

    let code = status.code().unwrap_or(1);
    eprintln!("'yarn {}' failed with exit code {code}.", args.join(" "));
    Err(CliError::process_exit_code(code).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Scripted runner that records every invocation and fails the
    /// configured run step (1-based) with the given exit code.
    struct ScriptedRunner {
        calls: RefCell<Vec<String>>,
        probe_ok: bool,
        fail_on_step: Option<(usize, i32)>,
    }

    impl ScriptedRunner {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                probe_ok: true,
                fail_on_step: None,
            }
        }

        fn failing_probe() -> Self {
            Self {
                probe_ok: false,
                ..Self::succeeding()
            }
        }

        fn failing_step(step: usize, code: i32) -> Self {
            Self {
                fail_on_step: Some((step, code)),
                ..Self::succeeding()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<CommandStatus> {
            let mut calls = self.calls.borrow_mut();
            calls.push(format!("{program} {}", args.join(" ")));

            let step = calls.iter().filter(|c| !c.starts_with("probe")).count();
            match self.fail_on_step {
                Some((failing, code)) if failing == step => {
                    Ok(CommandStatus::new(false, Some(code)))
                }
                _ => Ok(CommandStatus::new(true, Some(0))),
            }
        }

        fn probe(&self, program: &str) -> Result<CommandStatus> {
            self.calls.borrow_mut().push(format!("probe {program}"));
            Ok(CommandStatus::new(self.probe_ok, Some(i32::from(!self.probe_ok))))
        }
    }

    fn root() -> PathBuf {
        PathBuf::from("/tmp/react-starter-tests")
    }

    #[test]
    fn steps_run_in_fixed_order() {
        let runner = ScriptedRunner::succeeding();

        install_dependencies(&root(), &runner).unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                "probe yarn".to_string(),
                "yarn init --yes".to_string(),
                "yarn install".to_string(),
                "yarn add @babel/core babel-loader @babel/preset-env @babel/preset-react \
                 @babel/register webpack webpack-cli webpack-dev-server html-webpack-plugin --dev"
                    .to_string(),
                "yarn add react react-dom".to_string(),
            ]
        );
    }

    #[test]
    fn probe_failure_aborts_before_any_step() {
        let runner = ScriptedRunner::failing_probe();

        let err = install_dependencies(&root(), &runner).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::YarnNotFound)
        ));
        assert_eq!(runner.calls(), vec!["probe yarn".to_string()]);
    }

    #[test]
    fn failing_step_stops_the_sequence() {
        let runner = ScriptedRunner::failing_step(2, 7);

        let err = install_dependencies(&root(), &runner).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessExitCode { code: 7 })
        ));
        // probe + init + the failing install, nothing after.
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn step_exit_code_defaults_to_one_when_unknown() {
        struct SignalKilledRunner;

        impl CommandRunner for SignalKilledRunner {
            fn run(&self, _program: &str, _args: &[&str], _cwd: &Path) -> Result<CommandStatus> {
                Ok(CommandStatus::new(false, None))
            }

            fn probe(&self, _program: &str) -> Result<CommandStatus> {
                Ok(CommandStatus::new(true, Some(0)))
            }
        }

        let err = install_dependencies(&root(), &SignalKilledRunner).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessExitCode { code: 1 })
        ));
    }

    #[test]
    fn spawn_errors_propagate_from_the_runner() {
        struct BrokenRunner;

        impl CommandRunner for BrokenRunner {
            fn run(&self, program: &str, _args: &[&str], _cwd: &Path) -> Result<CommandStatus> {
                anyhow::bail!("Failed to execute {program}")
            }

            fn probe(&self, _program: &str) -> Result<CommandStatus> {
                Ok(CommandStatus::new(true, Some(0)))
            }
        }

        let err = install_dependencies(&root(), &BrokenRunner).unwrap_err();
        assert!(err.to_string().contains("Failed to execute yarn"));
    }
}
