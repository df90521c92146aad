/// CLI configuration: a YAML file plus `HUMANITEC_*` environment overrides.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Environment variables that override file values.
pub const TOKEN_ENV: &str = "HUMANITEC_TOKEN";
pub const ORG_ENV: &str = "HUMANITEC_ORG";
pub const API_URL_ENV: &str = "HUMANITEC_API_URL";

/// Errors reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}

/// Process-wide settings, loaded once and passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API token used as the bearer credential.
    pub humanitec_token: String,
    /// Organization id the commands operate in.
    pub humanitec_org: String,
    /// Output format used when `--output` is absent. Validated per command.
    pub default_output: Option<String>,
    /// Override for the API base URL.
    pub api_url: Option<String>,
}

impl Config {
    /// Read `path`. When `path` is the implicit default and does not exist,
    /// an empty config is returned so the environment alone can drive the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or parsed.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Parse YAML text. An empty document is an empty config.
    ///
    /// # Errors
    ///
    /// Returns the YAML error for malformed input.
    pub fn parse(raw: &str) -> Result<Self, serde_yaml_ng::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(raw)
    }

    /// Overlay non-empty values from `lookup` (normally `std::env::var`).
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(token) = get(TOKEN_ENV) {
            self.humanitec_token = token;
        }
        if let Some(org) = get(ORG_ENV) {
            self.humanitec_org = org;
        }
        if let Some(url) = get(API_URL_ENV) {
            self.api_url = Some(url);
        }
        self
    }
}
