//! Configuration file support for cluster-audit.
//!
//! Provides YAML-based configuration through `cluster-audit.config.yml`
//! files, including data structures, file loading, and validation. CLI
//! flags always take precedence over config values. The API token is
//! deliberately not a config field; it comes from flags or the
//! environment only.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::cli::OutputFormat;
use crate::shared::error::AuditError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "cluster-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub namespaces: Option<Vec<String>>,
    pub output: Option<String>,
    pub label_selector: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yml::from_str(&content).map_err(|e| AuditError::Config {
        details: format!("{}: {}", path.display(), e),
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
    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(output) = &config.output {
        OutputFormat::from_str(output).map_err(|e| AuditError::Config { details: e })?;
    }
    if let Some(namespaces) = &config.namespaces {
        if namespaces.iter().any(|namespace| namespace.is_empty()) {
            return Err(AuditError::Config {
                details: "namespaces must not contain empty entries".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!(
            "Warning: unknown field '{}' in {} is ignored",
            field, CONFIG_FILENAME
        );
    }
}
