//! Converter configuration.
//!
//! The OXP identity (name, domain url, topology version) and the Kytos
//! endpoint are read from a YAML file; command-line flags may override any of
//! them.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use crate::kytos::DEFAULT_TOPOLOGY_URL;
use crate::sdx::TopologyParams;

/// Errors found while validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid OXP configuration: {0}")]
    InvalidOxp(String),
    #[error("Invalid Kytos configuration: {0}")]
    InvalidKytos(String),
    #[error("Missing configuration: {0}")]
    Missing(String),
}

/// Top-level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub oxp: OxpConfig,
    /// Topology schema version; YAML numbers are accepted and kept as text
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,
    #[serde(default)]
    pub kytos: KytosConfig,
}

/// Identity of this OXP in the exchange
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OxpConfig {
    pub name: String,
    /// Domain embedded in every URN, e.g. `amlight.net`
    pub url: String,
}

/// Where to read the Kytos topology from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KytosConfig {
    #[serde(default = "default_topology_url")]
    pub topology_url: String,
    /// Request timeout; unset means the transport default
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl Default for KytosConfig {
    fn default() -> Self {
        Self {
            topology_url: default_topology_url(),
            timeout: None,
        }
    }
}

fn default_topology_url() -> String {
    DEFAULT_TOPOLOGY_URL.to_string()
}

fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Integer(u64),
        Float(f64),
    }

    Ok(match Version::deserialize(deserializer)? {
        Version::Text(text) => text,
        Version::Integer(number) => number.to_string(),
        Version::Float(number) => number.to_string(),
    })
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.oxp.name.trim().is_empty() {
            return Err(ConfigError::InvalidOxp("name cannot be empty".to_string()));
        }
        if self.oxp.url.trim().is_empty() {
            return Err(ConfigError::InvalidOxp("url cannot be empty".to_string()));
        }
        // The URN grammar uses ':' as its separator
        if self.oxp.url.contains(':') {
            return Err(ConfigError::InvalidOxp(format!(
                "url '{}' must not contain ':'",
                self.oxp.url
            )));
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::InvalidOxp("version cannot be empty".to_string()));
        }
        if self.kytos.topology_url.trim().is_empty() {
            return Err(ConfigError::InvalidKytos("topology_url cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Header values for the assembled topology
    pub fn topology_params(&self) -> TopologyParams {
        TopologyParams {
            version: self.version.clone(),
            oxp_name: self.oxp.name.clone(),
            oxp_url: self.oxp.url.clone(),
        }
    }

    /// Build a configuration purely from command-line values
    pub fn from_overrides(overrides: &ConfigOverrides) -> std::result::Result<Self, ConfigError> {
        let missing = |flag: &str| ConfigError::Missing(format!("{} is required without a configuration file", flag));

        let mut config = Config {
            oxp: OxpConfig {
                name: overrides.oxp_name.clone().ok_or_else(|| missing("--oxp-name"))?,
                url: overrides.oxp_url.clone().ok_or_else(|| missing("--oxp-url"))?,
            },
            version: overrides.version.clone().ok_or_else(|| missing("--topology-version"))?,
            kytos: KytosConfig::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Replace file values with any command-line values that were given
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(name) = &overrides.oxp_name {
            self.oxp.name = name.clone();
        }
        if let Some(url) = &overrides.oxp_url {
            self.oxp.url = url.clone();
        }
        if let Some(version) = &overrides.version {
            self.version = version.clone();
        }
        if let Some(topology_url) = &overrides.topology_url {
            self.kytos.topology_url = topology_url.clone();
        }
    }
}

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub oxp_name: Option<String>,
    pub oxp_url: Option<String>,
    pub version: Option<String>,
    pub topology_url: Option<String>,
}

/// Load and parse configuration from a YAML file.
///
/// The result is not validated; command-line overrides may still fill in or
/// replace fields, so callers run [`Config::validate`] once those are applied.
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration file '{}'", config_path.display()))?;
    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration file '{}'", config_path.display()))?;

    Ok(config)
}
