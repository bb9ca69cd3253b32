//! User configuration file.
//!
//! Read from `--config <path>` when given, otherwise from
//! `<config_dir>/tarot/config.toml`. A missing default file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use tarot_core::SessionConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {0}")]
    Invalid(#[from] tarot_core::TarotError),
}

/// Settings shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Fixed RNG seed; unset means a fresh shuffle every run.
    pub seed: Option<u64>,
    /// Maximum cosmetic card tilt in degrees.
    pub max_rotation: Option<f64>,
    /// Copy the prompt to the clipboard as soon as three cards are picked.
    pub auto_copy: bool,
}

impl AppConfig {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tarot").join("config.toml")
    }

    /// Load from `path`, or from the default location.
    ///
    /// An explicit path must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.session_config(None).validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Session settings, with `seed` taking precedence over the file.
    pub fn session_config(&self, seed: Option<u64>) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(seed) = seed.or(self.seed) {
            config = config.with_seed(seed);
        }
        if let Some(rotation) = self.max_rotation {
            config = config.with_max_rotation(rotation);
        }
        config
    }
}
