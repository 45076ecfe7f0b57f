//! Pre-flight safety check for the target directory.
//!
//! Scaffolding into an existing directory is allowed as long as it only
//! contains entries that cannot clash with the generated project:
//! version-control metadata, editor project files, documentation, and CI
//! configuration. Leftover installer logs from a previously failed run are
//! removed silently so the operator can simply re-run the tool. Any other
//! entry is a conflict and aborts the run.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Entries that may pre-exist in a target directory without blocking
/// scaffolding.
pub const VALID_PROJECT_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    ".git",
    ".gitignore",
    ".idea",
    "README.md",
    "LICENSE",
    ".hg",
    ".hgignore",
    ".hgcheck",
    ".npmignore",
    "mkdocs.yml",
    "docs",
    ".travis.yml",
    ".gitlab-ci.yml",
    ".gitattributes",
];

/// Filename prefixes of installer error logs left behind by a failed run.
///
/// Matches `(npm-debug|yarn-error|yarn-debug).log*` files.
pub const ERROR_LOG_FILE_PREFIXES: &[&str] = &["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

/// Returns true if `file_name` is a stale installer error log.
fn is_error_log(file_name: &str) -> bool {
    ERROR_LOG_FILE_PREFIXES
        .iter()
        .any(|prefix| file_name.starts_with(prefix))
}

/// Returns true if `file_name` is tolerated in a target directory.
fn is_tolerated(file_name: &str) -> bool {
    VALID_PROJECT_FILES.contains(&file_name)
        || file_name.ends_with(".iml")
        || is_error_log(file_name)
}

/// Lists the entries of `root` that would conflict with scaffolding.
///
/// Entries are returned in the order they are encountered, each exactly
/// once. Allow-listed names, `.iml` editor project files, and stale
/// installer logs are not conflicts.
///
/// # Errors
///
/// Returns an error if `root` cannot be read.
pub fn find_conflicts(root: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut conflicts = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", root.display()))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_tolerated(&file_name) {
            conflicts.push(file_name);
        }
    }

    Ok(conflicts)
}

/// Removes stale installer logs from `root`.
///
/// Removal is best-effort: a failed deletion prints a warning and the run
/// continues, since a leftover log cannot clash with any generated file.
///
/// # Errors
///
/// Returns an error if `root` cannot be read.
pub fn remove_stale_logs(root: &Path) -> Result<()> {
    let entries =
        fs::read_dir(root).with_context(|| format!("Failed to read directory: {}", root.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", root.display()))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_error_log(&file_name) {
            continue;
        }

        let path = entry.path();
        debug!("Removing stale installer log {}", path.display());
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = removed {
            eprintln!("Warning: failed to remove stale log {}: {e}", path.display());
        }
    }

    Ok(())
}

/// Checks whether scaffolding may proceed in `root`.
///
/// Prints the conflict report (one line per offending entry, plus
/// guidance) and returns `false` when conflicts exist. Otherwise removes
/// stale installer logs and returns `true`.
///
/// `name` is the directory name as the operator typed it, used in the
/// report; `root` must already exist.
///
/// # Errors
///
/// Returns an error if `root` cannot be read.
pub fn is_safe_to_create_project_in(root: &Path, name: &str) -> Result<bool> {
    let conflicts = find_conflicts(root)?;

    if !conflicts.is_empty() {
        println!("The directory {name} contains files that could conflict:");
        println!();
        for file in &conflicts {
            println!("  {file}");
        }
        println!();
        println!("Either try using a new directory name, or remove the files listed above.");
        return Ok(false);
    }

    remove_stale_logs(root)?;
    Ok(true)
}
