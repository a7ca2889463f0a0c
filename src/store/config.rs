//! Store configuration and data file location.
//!
//! This module provides configuration for the document store, including
//! path resolution from the environment and sensible defaults under the
//! user's home directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for opening a [`Store`](crate::Store).
///
/// # Examples
///
/// ```
/// use devpool::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/devpool.json");
///
/// // Compact on-disk encoding instead of the pretty-printed default.
/// let config = StoreConfig::new("/tmp/devpool.json").with_pretty(false);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the JSON data file.
    pub path: PathBuf,
    /// Whether to create the data file (and its parent directories) if
    /// they do not exist.
    pub auto_create: bool,
    /// Whether to pretty-print the data file. The default is true: the
    /// file doubles as a human-inspectable record of the pool.
    pub pretty: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with default settings.
    ///
    /// Defaults: `auto_create` enabled, pretty-printed output.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            auto_create: true,
            pretty: true,
        }
    }

    /// Sets whether the data file is pretty-printed.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Disables creation of a missing data file.
    ///
    /// With auto-creation disabled, [`Store::open`](crate::Store::open)
    /// fails if the data file does not exist.
    #[must_use]
    pub const fn no_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.devpool`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "cannot determine home directory".into(),
    })?;
    Ok(home.join(".devpool"))
}

/// Resolves the data file path from the environment or defaults.
///
/// The resolution order is:
/// 1. `$DEVPOOL_DATA_DIR/devpool.json` if `DEVPOOL_DATA_DIR` is set
/// 2. `~/.devpool/devpool.json` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `DEVPOOL_DATA_DIR` is not set.
pub fn resolve_store_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("DEVPOOL_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("devpool.json"))
    } else {
        Ok(default_data_dir()?.join("devpool.json"))
    }
}
