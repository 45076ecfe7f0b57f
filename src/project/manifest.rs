//! The generated `package.json` manifest.
//!
//! The manifest is deliberately minimal: yarn fills in the dependency
//! tables itself during installation, so only the name, version, entry
//! file, script bindings, and license are written here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version assigned to every freshly scaffolded project.
const INITIAL_VERSION: &str = "0.1.0";

/// The `package.json` structure written into new projects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageJson {
    /// The project name, derived from the target directory.
    pub name: String,

    /// The project version (semver format).
    pub version: String,

    /// The declared entry file.
    pub main: String,

    /// Script bindings runnable via `yarn <script>`.
    pub scripts: Scripts,

    /// License identifier.
    pub license: String,
}

/// The `scripts` table of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scripts {
    /// Placeholder test script; fails until the project grows real tests.
    pub test: String,

    /// Launches the webpack development server.
    pub start: String,
}

impl PackageJson {
    /// Creates the manifest for a new project named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: String::from(INITIAL_VERSION),
            main: String::from("index.js"),
            scripts: Scripts {
                test: String::from("echo \"Error: no test specified\" && exit 1"),
                start: String::from("webpack-dev-server"),
            },
            license: String::from("MIT"),
        }
    }

    /// Serializes the manifest to pretty-printed JSON with a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let rendered =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        Ok(rendered + "\n")
    }

    /// Writes the manifest to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn new_manifest_has_fixed_defaults() {
        let manifest = PackageJson::new("my-app");
        assert_eq!(manifest.name, "my-app");
        assert_eq!(manifest.version, "0.1.0");
        assert_eq!(manifest.main, "index.js");
        assert_eq!(manifest.scripts.start, "webpack-dev-server");
        assert_eq!(manifest.scripts.test, "echo \"Error: no test specified\" && exit 1");
        assert_eq!(manifest.license, "MIT");
    }

    #[test]
    fn to_json_round_trips() {
        let manifest = PackageJson::new("my-app");
        let rendered = manifest.to_json().unwrap();

        let parsed: PackageJson = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn to_json_is_pretty_printed_with_trailing_newline() {
        let rendered = PackageJson::new("my-app").to_json().unwrap();
        assert!(rendered.contains("\"name\": \"my-app\""));
        assert!(rendered.contains("\"start\": \"webpack-dev-server\""));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn to_json_has_exactly_the_declared_fields() {
        let rendered = PackageJson::new("my-app").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["license", "main", "name", "scripts", "version"]);

        let scripts = object["scripts"].as_object().unwrap();
        assert_eq!(scripts.len(), 2);
        assert!(scripts.contains_key("test"));
        assert!(scripts.contains_key("start"));
    }

    #[test]
    fn write_to_file_creates_readable_manifest() {
        let dir = std::env::temp_dir().join(format!("react_starter_test_{}", rand::random::<u64>()));
        fs::create_dir_all(&dir).unwrap();
        let path: PathBuf = dir.join("package.json");

        PackageJson::new("my-app").write_to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"license\": \"MIT\""));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_to_file_fails_for_missing_parent() {
        let dir = std::env::temp_dir().join(format!("react_starter_test_{}", rand::random::<u64>()));
        let path = dir.join("nope").join("package.json");

        assert!(PackageJson::new("my-app").write_to_file(&path).is_err());
    }
}
