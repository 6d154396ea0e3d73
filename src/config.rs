//! Configuration file support for sbomgen.
//!
//! Provides YAML-based configuration through `sbomgen.config.yml` files:
//! the data structure, file loading, and validation. Values from the file
//! sit between command-line flags and the built-in defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbomgen.config.yml";

/// Top-level configuration file schema.
///
/// Tokens are deliberately absent: they come from `--token` or `GITHUB_TOKEN`.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory SBOM files are written to
    pub output_dir: Option<String>,
    /// Scanner executable used in local mode
    pub scanner: Option<String>,
    /// Base URL of the GitHub REST API (GitHub Enterprise: `https://host/api/v3`)
    pub api_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SbomError::configuration(
            format!("Failed to read config file: {} ({})", path.display(), e),
            "Check that the file exists and is readable.",
        )
    })?;

    // An empty file deserializes to `null`, treat it as "no settings"
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        SbomError::configuration(
            format!("Failed to parse config file: {} ({})", path.display(), e),
            "Ensure the file contains valid YAML syntax.",
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
    for (key, value) in [
        ("output_dir", &config.output_dir),
        ("scanner", &config.scanner),
        ("api_url", &config.api_url),
    ] {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            return Err(SbomError::configuration(
                format!("Invalid config: '{}' must not be empty.", key),
                format!("Remove the '{}' line to use the default.", key),
            )
            .into());
        }
    }

    if let Some(ref api_url) = config.api_url {
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(SbomError::configuration(
                format!("Invalid config: api_url '{}' is not an http(s) URL.", api_url),
                "Use a URL such as https://api.github.com",
            )
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
