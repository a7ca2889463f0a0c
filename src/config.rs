//! Application configuration.
//!
//! Configuration is assembled from up to three layers, each overriding
//! the one before it: an optional YAML file (`devpool.yaml`), environment
//! variables (`DEVPOOL_DATA_DIR`, `DEVPOOL_LOG_MODE`), and explicit
//! builder calls. The result resolves to a concrete
//! [`StoreConfig`](crate::StoreConfig) and [`LogLevel`](crate::LogLevel).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::store::{default_data_dir, StoreConfig};

/// Complete configuration structure.
///
/// Unknown fields in a configuration file are rejected, so typos surface
/// as errors instead of being silently ignored.
///
/// # Examples
///
/// ```
/// use devpool::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/srv/devpool")),
///     ..Default::default()
/// };
/// assert_eq!(config.data_dir, Some(PathBuf::from("/srv/devpool")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the data file. Defaults to `~/.devpool`.
    pub data_dir: Option<PathBuf>,

    /// Log mode: "quiet", "normal", or "verbose". Defaults to "normal".
    pub log_mode: Option<String>,

    /// Whether the data file is pretty-printed. Defaults to true.
    pub pretty_json: Option<bool>,
}

impl Config {
    /// Resolves this configuration to a store configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is configured and the home
    /// directory cannot be determined.
    pub fn store_config(&self) -> Result<StoreConfig> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        Ok(StoreConfig::new(data_dir.join("devpool.json"))
            .with_pretty(self.pretty_json.unwrap_or(true)))
    }

    /// Resolves the configured log level.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured mode is not a recognized level.
    pub fn log_level(&self) -> Result<LogLevel> {
        match &self.log_mode {
            None => Ok(LogLevel::Normal),
            Some(mode) => LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            }),
        }
    }

    // Fields set in `other` override fields set here.
    fn merge_from(&mut self, other: Self) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
        if other.pretty_json.is_some() {
            self.pretty_json = other.pretty_json;
        }
    }
}

/// Builder assembling a [`Config`] from file, environment, and explicit
/// settings.
///
/// Layers are applied in call order, so later calls take precedence:
///
/// ```no_run
/// use devpool::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file("devpool.yaml")
///     .unwrap()
///     .with_env()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a builder with an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers in settings from a YAML file.
    ///
    /// A missing file is not an error; the layer is simply skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or contains unknown fields.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("config file {} missing, skipping", path.display());
            return Ok(self);
        }
        let payload = std::fs::read_to_string(path)?;
        let file_config: Config = serde_yaml::from_str(&payload)?;
        self.config.merge_from(file_config);
        Ok(self)
    }

    /// Layers in settings from `DEVPOOL_DATA_DIR` and `DEVPOOL_LOG_MODE`.
    #[must_use]
    pub fn with_env(mut self) -> Self {
        let env_config = Config {
            data_dir: std::env::var("DEVPOOL_DATA_DIR").ok().map(PathBuf::from),
            log_mode: std::env::var("DEVPOOL_LOG_MODE").ok(),
            pretty_json: None,
        };
        self.config.merge_from(env_config);
        self
    }

    /// Sets the data directory explicitly.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    /// Sets the log mode explicitly.
    #[must_use]
    pub fn log_mode(mut self, mode: impl Into<String>) -> Self {
        self.config.log_mode = Some(mode.into());
        self
    }

    /// Sets whether the data file is pretty-printed.
    #[must_use]
    pub const fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = Some(pretty);
        self
    }

    /// Validates and returns the assembled configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log mode is not a recognized
    /// level.
    pub fn build(self) -> Result<Config> {
        self.config.log_level()?;
        Ok(self.config)
    }
}
