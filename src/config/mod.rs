//! Configuration for the metadata factory and the bundled tools
//!
//! Loaded from JSON or TOML. Every field has a default, so an empty document is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metadata::{DEFAULT_STATUS, DEFAULT_STATUS_SCHEME};
use crate::utils::{ensure_fmt, ensure_not_blank, ensure_not_empty};

/// What the factory does when an artifact names a configuration the module does not declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactConfigurationCheck {
    /// Construct without looking
    Trust,
    /// Construct, logging each undeclared reference
    #[default]
    Warn,
    /// Refuse to construct
    Reject,
}

/// Metadata factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default)]
    pub artifact_configuration_check: ArtifactConfigurationCheck,

    /// Status assigned to every created module
    #[serde(default = "default_status")]
    pub default_status: String,

    /// Ordered status scheme, least to most mature
    #[serde(default = "default_status_scheme")]
    pub status_scheme: Vec<String>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_status_scheme() -> Vec<String> {
    DEFAULT_STATUS_SCHEME.iter().map(|s| s.to_string()).collect()
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            artifact_configuration_check: ArtifactConfigurationCheck::default(),
            default_status: default_status(),
            status_scheme: default_status_scheme(),
        }
    }
}

impl FactoryConfig {
    /// Validate factory configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_not_blank(&self.default_status, "default_status").map_err(anyhow::Error::msg)?;
        ensure_not_empty(&self.status_scheme, "status_scheme").map_err(anyhow::Error::msg)?;
        ensure_fmt(self.status_scheme.contains(&self.default_status), || {
            format!(
                "default_status '{}' is not part of status_scheme {:?}",
                self.default_status, self.status_scheme
            )
        })
        .map_err(anyhow::Error::msg)?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "ivy_module_metadata=debug"); RUST_LOG takes precedence
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON lines (requires the `json-logging` feature)
    #[serde(default)]
    pub json_format: bool,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub factory: FactoryConfig,

    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl MetadataConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MetadataConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MetadataConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load by extension: `.toml` as TOML, anything else as JSON
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            _ => Self::from_json_file(path),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.factory.validate()
    }
}
