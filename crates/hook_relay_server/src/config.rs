//! Gateway configuration file loading.
//!
//! The configuration is stored in TOML format. Key paths are relative to
//! the directory containing the configuration file, so secrets can live
//! next to it in a mounted volume.
//!
//! # Example configuration
//!
//! ```toml
//! version = 1
//! api = "http://flux:3030/api/flux"
//!
//! [[endpoints]]
//! source = "DockerHub"
//! key_path = "dockerhub_key"
//! registry_host = "index.docker.io"
//!
//! [[endpoints]]
//! source = "Quay"
//! key_path = "quay_key"
//! registry_host = "quay.io"
//! strict_delivery = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use hook_relay_core::Endpoint;

use crate::errors::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILENAME: &str = "hooks.toml";

/// The configuration schema version this gateway understands.
pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// The gateway's configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Configuration schema version; must equal
    /// [`SUPPORTED_CONFIG_VERSION`].
    pub version: u32,

    /// Base URL of the control plane's API.
    pub api: String,

    /// The webhook endpoints to compile and serve.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl GatewayConfig {
    /// Load and validate the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read,
    /// [`Error::ConfigParse`] if it is not valid TOML for this schema, and
    /// [`Error::UnsupportedConfigVersion`] if its version field does not
    /// match [`SUPPORTED_CONFIG_VERSION`].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|err| Error::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|err| Error::ConfigParse {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        if config.version != SUPPORTED_CONFIG_VERSION {
            return Err(Error::UnsupportedConfigVersion {
                found: config.version,
                expected: SUPPORTED_CONFIG_VERSION,
            });
        }

        debug!(
            path = %path.display(),
            endpoints = config.endpoints.len(),
            "loaded gateway configuration"
        );
        Ok(config)
    }

    /// The directory key paths resolve against: the configuration file's
    /// own directory.
    pub fn base_dir(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
