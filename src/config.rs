//! Configuration file support for checkstyle-runner.
//!
//! Provides YAML-based configuration through `checkstyle-runner.config.yml`
//! files, including data structures, file loading, and validation. The
//! command line overrides anything set here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "checkstyle-runner.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// The Checkstyle rule configuration (`checkstyle.xml`).
    pub checkstyle_config: Option<PathBuf>,
    pub suppressions: Option<PathBuf>,
    /// Jars forming the tool's classpath.
    pub tool_classpath: Option<Vec<PathBuf>>,
    pub output_dir: Option<PathBuf>,
    /// `info`, `warning` or `error`. Defaults to `error`.
    pub severity_threshold: Option<String>,
    pub toolchain: Option<ToolchainConfig>,
    pub source_sets: Option<Vec<SourceSetConfig>>,
    /// Per-source-set wall-clock limit in seconds. Absent means no limit.
    pub timeout_secs: Option<u64>,
    /// JSON manifest of installed runtimes, if one is maintained.
    pub installations_manifest: Option<PathBuf>,
    /// Directories scanned for JDK installations.
    pub installation_dirs: Option<Vec<PathBuf>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Toolchain constraint: which installed JDK the tool must run under.
#[derive(Debug, Deserialize)]
pub struct ToolchainConfig {
    pub version: Option<u32>,
    pub vendor: Option<String>,
}

/// One analyzed source set.
#[derive(Debug, Deserialize)]
pub struct SourceSetConfig {
    pub id: String,
    pub roots: Vec<PathBuf>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref threshold) = config.severity_threshold {
        if crate::analysis::domain::Severity::parse(threshold).is_none() {
            bail!(
                "Invalid config: severity_threshold '{}' is not recognized.\n\n\
                 💡 Hint: Use one of 'info', 'warning' or 'error'.",
                threshold
            );
        }
    }
    if let Some(ref source_sets) = config.source_sets {
        for (i, entry) in source_sets.iter().enumerate() {
            if entry.id.trim().is_empty() {
                bail!(
                    "Invalid config: source_sets[{}].id must not be empty.\n\n\
                     💡 Hint: Each source set needs a name (e.g., \"main\" or \"test\").",
                    i
                );
            }
            if entry.roots.is_empty() {
                bail!(
                    "Invalid config: source_sets[{}] ('{}') has no roots.\n\n\
                     💡 Hint: List at least one directory to analyze (e.g., \"src/main/java\").",
                    i,
                    entry.id
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
