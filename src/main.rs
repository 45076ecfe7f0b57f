#![warn(clippy::pedantic)]

//! # react-starter
//!
//! The `react-starter` command scaffolds a minimal React + webpack project:
//! it creates the target directory, writes a `package.json`, installs the
//! build toolchain and the UI framework with yarn, and drops in a small set
//! of ready-to-run configuration and entry-point templates.
//!
//! ## Usage
//!
//! Create a new project:
//! ```bash
//! react-starter my-app
//! ```
//!
//! Print environment debug info without scaffolding:
//! ```bash
//! react-starter --info
//! ```
//!
//! ## Generated Structure
//!
//! ```text
//! my-app/
//! +-- package.json
//! +-- .babelrc
//! +-- webpack.config.js
//! +-- development.js
//! +-- src/
//! |   +-- index.html
//! |   +-- index.jsx
//! +-- dist/
//! ```
//!
//! Dependency installation is delegated entirely to yarn; the tool itself
//! performs no network I/O.

mod commands;
mod errors;
mod installer;
mod project;

use anyhow::Result;
use clap::Parser;
use log::debug;

use errors::CliError;

/// Scaffold a minimal React + webpack starter project.
///
/// Creates the target directory, writes the project manifest, installs the
/// build toolchain with yarn, and generates the bundler and entry-point
/// templates.
#[derive(Parser)]
#[command(
    name = "react-starter",
    author,
    version,
    about = "Scaffold a minimal React + webpack starter project",
    long_about = "The 'react-starter' command creates a ready-to-run React project: a \
    package.json manifest, a webpack + babel build setup installed through yarn, and \
    HTML/JSX entry points wired to a hot-reloading development server.",
    ignore_errors = true,
    after_help = "\
PACKAGE MANAGER:
    Dependencies are installed with yarn, which must be available on PATH.
    npm is not supported; --use-npm exists only to explain that.

SAFETY:
    An existing target directory is accepted as long as it only contains
    version-control metadata, editor project files, or documentation
    (.git, .gitignore, .idea, README.md, LICENSE, ...). Leftover installer
    logs from a failed run (npm-debug.log*, yarn-error.log*, yarn-debug.log*)
    are removed automatically. Anything else aborts the run untouched."
)]
pub struct Cli {
    /// Directory to create the project in.
    ///
    /// May be relative or absolute; the project name is derived from the
    /// final path component.
    pub project_directory: Option<String>,

    /// Print environment debug info and exit without scaffolding.
    #[clap(long = "info", action = clap::ArgAction::SetTrue)]
    pub info: bool,

    /// Install dependencies with npm instead of yarn (unsupported).
    #[clap(long = "use-npm", action = clap::ArgAction::SetTrue)]
    pub use_npm: bool,
}

fn main() {
    if let Err(e) = run() {
        let exit_code = handle_error(&e);
        std::process::exit(exit_code);
    }
}

/// Handles an error and returns the appropriate exit code.
///
/// For `ProcessExitCode` errors, returns the embedded exit code without
/// printing an error message (the diagnostics were already printed, either
/// by a subprocess or by the stage that failed). For all other errors,
/// prints the error and returns exit code 1.
fn handle_error(e: &anyhow::Error) -> i32 {
    if let Some(CliError::ProcessExitCode { code }) = e.downcast_ref::<CliError>() {
        return *code;
    }
    eprintln!("Error: {e:?}");
    1
}

fn run() -> Result<()> {
    let _ = env_logger::builder().format_timestamp(None).try_init();

    let cli = Cli::parse();

    if cli.info {
        return commands::info::execute();
    }

    let Some(directory) = cli.project_directory else {
        print_usage();
        return Err(CliError::process_exit_code(1).into());
    };

    debug!("Scaffolding into {directory:?} (use_npm: {})", cli.use_npm);

    commands::create::execute(&directory, cli.use_npm)
}

/// Prints the guidance shown when the directory argument is missing.
fn print_usage() {
    eprintln!("Please specify the project directory:");
    eprintln!("  react-starter <project-directory>");
    eprintln!();
    eprintln!("For example:");
    eprintln!("  react-starter my-app");
    eprintln!();
    eprintln!("Run 'react-starter --help' to see all options.");
}
