//! Configuration loading and parsing for `relmake.toml` files.
//!
//! Every field is optional in the file; defaults match the conventional
//! layout of a setup.py-based Python project.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{error::RelmakeError, result::Result};
use color_eyre::eyre::WrapErr;

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "relmake.toml";

/// Default Python interpreter.
pub const DEFAULT_PYTHON: &str = "python3";

/// Documentation generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct DocConfig {
    /// Sphinx source directory.
    pub source: String,
    /// HTML output directory.
    pub output: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            source: "doc".to_string(),
            output: "build/doc".to_string(),
        }
    }
}

/// Lint tool invocation for the `check` target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Arguments appended to the Python interpreter.
    pub command: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            command: vec!["-m".to_string(), "flake8".to_string()],
        }
    }
}

/// Test runner invocation for the `test` target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Arguments appended to the Python interpreter.
    pub command: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            command: vec!["-m".to_string(), "tox".to_string()],
        }
    }
}

/// Root configuration structure for `relmake.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package name passed to `pip uninstall`. Defaults to the basename of
    /// the current directory when left empty.
    pub package: String,
    /// Python interpreter. Overridden by --python / PYTHON.
    pub python: String,
    /// Extra arguments forwarded to `pip install`. Overridden by
    /// --pip-args / PIP_ARGS.
    pub pip_args: Vec<String>,
    /// Changelog file searched by the release gate.
    pub changelog: String,
    /// Directory where setup.py writes source distributions.
    pub dist_dir: String,
    /// Prefix prepended to the version when tagging (e.g. "v").
    pub tag_prefix: String,
    /// Git remote that release tags are pushed to.
    pub remote: String,
    /// Documentation generation settings.
    pub doc: DocConfig,
    /// Lint tool settings.
    pub lint: LintConfig,
    /// Test runner settings.
    pub test: TestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: String::new(),
            python: DEFAULT_PYTHON.to_string(),
            pip_args: vec![],
            changelog: "ChangeLog".to_string(),
            dist_dir: "dist".to_string(),
            tag_prefix: String::new(),
            remote: "origin".to_string(),
            doc: DocConfig::default(),
            lint: LintConfig::default(),
            test: TestConfig::default(),
        }
    }
}

/// Load configuration from the given path, falling back to defaults when
/// the file does not exist.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    if !path.exists() {
        debug!("no config file at {}: using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).wrap_err_with(|| {
        format!("failed to read config file {}", path.display())
    })?;

    let config: Config = toml::from_str(&content)
        .map_err(RelmakeError::from)
        .wrap_err_with(|| {
            format!("failed to parse config file {}", path.display())
        })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn loads_defaults() {
        let config = Config::default();
        assert_eq!(config.python, DEFAULT_PYTHON);
        assert_eq!(config.changelog, "ChangeLog");
        assert_eq!(config.dist_dir, "dist");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.lint.command, vec!["-m", "flake8"]);
        assert_eq!(config.test.command, vec!["-m", "tox"]);
    }

    #[test]
    fn loads_defaults_when_file_is_absent() {
        let tmp_dir = TempDir::new().unwrap();
        let config = load(Some(&tmp_dir.path().join("relmake.toml"))).unwrap();
        assert_eq!(config.python, DEFAULT_PYTHON);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("relmake.toml");

        fs::write(
            &path,
            r#"
package = "pyocr"
tag_prefix = "v"

[doc]
source = "docs"

[lint]
command = ["-m", "ruff", "check"]
"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.package, "pyocr");
        assert_eq!(config.tag_prefix, "v");
        assert_eq!(config.doc.source, "docs");
        // untouched sections keep their defaults
        assert_eq!(config.doc.output, "build/doc");
        assert_eq!(config.lint.command, vec!["-m", "ruff", "check"]);
        assert_eq!(config.python, DEFAULT_PYTHON);
    }

    #[test]
    fn rejects_malformed_toml() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("relmake.toml");
        fs::write(&path, "package = [unclosed").unwrap();

        assert!(load(Some(&path)).is_err());
    }
}
