//! The scaffolding flow.
//!
//! A single linear pass: resolve the target, create the directory, check
//! it is safe to use, write the manifest and layout, install dependencies
//! with yarn, write the templates, report success. Every stage receives
//! the resolved absolute path explicitly; the working directory of the
//! process is never changed.
//!
//! There is no rollback: a failure leaves whatever was already written,
//! and the safety check cleans up known installer logs on the next run.

use anyhow::Result;
use log::debug;

use crate::errors::CliError;
use crate::installer::{self, ShellRunner};
use crate::project::{self, PackageJson, scaffold};

/// Executes the scaffolding flow for `directory`.
///
/// # Errors
///
/// Returns an error if the directory is unsafe to scaffold into, npm was
/// requested, yarn is missing or a yarn step fails, or any filesystem
/// write fails.
pub fn execute(directory: &str, use_npm: bool) -> Result<()> {
    let target = scaffold::resolve_target(directory)?;
    debug!("Resolved target {} ({})", target.root.display(), target.app_name);

    scaffold::ensure_target_dir(&target.root)?;

    if !project::is_safe_to_create_project_in(&target.root, directory)? {
        // The conflict report was already printed.
        return Err(CliError::process_exit_code(1).into());
    }

    println!("Creating a new React app in {}.", target.root.display());
    println!();

    let manifest = PackageJson::new(&target.app_name);
    manifest.write_to_file(&target.root.join("package.json"))?;
    scaffold::create_build_dirs(&target.root)?;

    if use_npm {
        return Err(CliError::UnsupportedPackageManager.into());
    }

    installer::install_dependencies(&target.root, &ShellRunner)?;

    project::write_templates(&target.root)?;

    println!();
    println!("Success! Created {} at {}", target.app_name, target.root.display());
    println!();
    println!("Next steps:");
    println!("  cd {directory}");
    println!("  yarn start");

    Ok(())
}
