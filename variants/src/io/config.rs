//! Configuration stored under `.variants/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Default config location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".variants/config.toml";

/// Variants configuration (TOML).
///
/// Meant to be edited by humans. Missing fields fall back to defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VariantsConfig {
    /// Check payloads before replaying: known resource type, no blank fields.
    pub strict_resource_types: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit single-line JSON instead of pretty-printed JSON.
    pub compact: bool,
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            strict_resource_types: false,
            log_filter: "warn".to_string(),
            output: OutputConfig::default(),
        }
    }
}

impl VariantsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `VariantsConfig::default()`.
pub fn load_config(path: &Path) -> Result<VariantsConfig> {
    if !path.exists() {
        let cfg = VariantsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: VariantsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
