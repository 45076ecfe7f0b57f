//! Target directory resolution and initial layout.
//!
//! The resolved absolute path is computed once and threaded explicitly
//! through every later stage; the process working directory is never
//! changed.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// A resolved scaffolding target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    /// Absolute path of the project directory.
    pub root: PathBuf,

    /// Project name, the final component of `root`.
    pub app_name: String,
}

/// Resolves the directory argument into an absolute path and a project
/// name.
///
/// Relative paths are resolved against the current working directory. The
/// directory does not need to exist yet.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or if no
/// project name can be derived from the path (e.g. a bare `..`).
pub fn resolve_target(directory: &str) -> Result<TargetDir> {
    let path = Path::new(directory);
    let root = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to determine the current directory")?
            .join(path)
    };

    let app_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .ok_or_else(|| anyhow!("Could not determine a project name from '{directory}'"))?;

    Ok(TargetDir { root, app_name })
}

/// Creates the target directory and its parent chain.
///
/// Idempotent: an already existing directory is not an error, consistent
/// with the safety check validating its contents separately.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn ensure_target_dir(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create project directory: {}", root.display()))
}

/// Creates the `src` (source entry) and `dist` (build output)
/// subdirectories.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn create_build_dirs(root: &Path) -> Result<()> {
    let src_dir = root.join("src");
    std::fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create src directory: {}", src_dir.display()))?;

    let dist_dir = root.join("dist");
    std::fs::create_dir_all(&dist_dir)
        .with_context(|| format!("Failed to create dist directory: {}", dist_dir.display()))?;

    Ok(())
}
