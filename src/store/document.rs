//! The on-disk document model.
//!
//! The whole store is one JSON object mapping collection names to arrays
//! of flat field-maps:
//!
//! ```json
//! {
//!   "users": [{ "id": "u1", "name": "Ada" }],
//!   "devices": [],
//!   "maintenances": [],
//!   "reservations": []
//! }
//! ```
//!
//! Persistence rewrites the whole document through a temp-file-and-rename
//! sequence, so a crash mid-write never leaves a truncated data file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::config::StoreConfig;

/// In-memory form of the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(super) struct Document {
    collections: BTreeMap<String, Vec<Map<String, Value>>>,
}

impl Document {
    /// Loads the document from disk.
    ///
    /// A missing file yields an empty document when `auto_create` is
    /// enabled, and an error otherwise.
    pub(super) fn load(config: &StoreConfig) -> Result<Self> {
        if !config.path.exists() {
            if config.auto_create {
                log::debug!("data file {} missing, starting empty", config.path.display());
                return Ok(Self::default());
            }
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("data file not found: {}", config.path.display()),
            )));
        }
        let payload = fs::read_to_string(&config.path)?;
        let document = serde_json::from_str(&payload)?;
        Ok(document)
    }

    /// Writes the document to disk atomically.
    pub(super) fn persist(&self, config: &StoreConfig) -> Result<()> {
        if config.auto_create {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        let payload = if config.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        let tmp = temp_path(&config.path);
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &config.path)?;
        Ok(())
    }

    /// Returns the records of a collection, or an empty slice if the
    /// collection does not exist yet.
    pub(super) fn records(&self, collection: &str) -> &[Map<String, Value>] {
        self.collections
            .get(collection)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the records of a collection for mutation, creating the
    /// collection if necessary.
    pub(super) fn records_mut(&mut self, collection: &str) -> &mut Vec<Map<String, Value>> {
        self.collections.entry(collection.to_string()).or_default()
    }
}

fn temp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| "devpool.json".into(), ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}
