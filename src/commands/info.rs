//! The `--info` environment report.
//!
//! Prints the host system, the versions of the JavaScript tooling found on
//! PATH, and the framework packages installed in the current directory's
//! `node_modules`. Every probe degrades to a "Not Found"/"Not Installed"
//! line instead of failing, so the report always completes with exit 0.

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Binaries probed with `<binary> --version`, as (label, executable).
const PROBED_BINARIES: &[(&str, &str)] = &[("Node", "node"), ("npm", "npm"), ("Yarn", "yarn")];

/// Packages looked up in `./node_modules`.
const REPORTED_PACKAGES: &[&str] = &["react", "react-dom", "webpack"];

/// Prints the environment report.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for uniformity with the other
/// commands.
#[allow(clippy::unnecessary_wraps)]
pub fn execute() -> Result<()> {
    println!("Environment Info:");
    println!();
    println!("  System:");
    println!("    OS: {}", std::env::consts::OS);
    println!("    CPU: {}", std::env::consts::ARCH);
    println!("  Binaries:");
    for (label, program) in PROBED_BINARIES {
        let version =
            probe_binary_version(program).unwrap_or_else(|| String::from("Not Found"));
        println!("    {label}: {version}");
    }
    println!("  npmPackages:");
    let node_modules = Path::new("node_modules");
    for package in REPORTED_PACKAGES {
        let version = installed_package_version(node_modules, package)
            .unwrap_or_else(|| String::from("Not Installed"));
        println!("    {package}: {version}");
    }

    Ok(())
}

/// Runs `program --version` and parses the reported version.
///
/// Returns `None` if the program is missing, exits non-zero, or prints
/// something that does not look like a version.
fn probe_binary_version(program: &str) -> Option<String> {
    let output = Command::new(program).arg("--version").output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    parse_version_output(&stdout)
}

/// Parses `--version` output into a bare version string.
///
/// Tolerates a leading `v` (node prints "v18.17.0") and surrounding
/// whitespace; anything not starting with a digit after that is rejected.
fn parse_version_output(output: &str) -> Option<String> {
    let trimmed = output.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);

    if !version.chars().next()?.is_ascii_digit() {
        return None;
    }

    Some(version.to_string())
}

/// Reads the installed version of `package` from
/// `<node_modules>/<package>/package.json`.
fn installed_package_version(node_modules: &Path, package: &str) -> Option<String> {
    let manifest_path = node_modules.join(package).join("package.json");
    let content = std::fs::read_to_string(manifest_path).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;

    manifest.get("version")?.as_str().map(String::from)
}
