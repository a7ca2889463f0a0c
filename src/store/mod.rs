//! Persistence layer: a single-file JSON document store.
//!
//! All persisted state lives in one JSON document of named collections
//! (`users`, `devices`, `maintenances`, `reservations`), each an array of
//! flat field-maps. Records are keyed by the unique field their entity
//! kind declares; see [`Entity`](crate::Entity).
//!
//! # Examples
//!
//! ```no_run
//! use devpool::{Store, StoreConfig, User};
//!
//! let mut store = Store::open(StoreConfig::new("/tmp/devpool.json")).unwrap();
//!
//! store.upsert(&User::new("u1", "Ada").unwrap()).unwrap();
//! assert!(store.find_by_key::<User>("u1").is_some());
//!
//! store.delete_by_key::<User>("u1").unwrap();
//! ```

mod config;
mod document;
mod operations;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, resolve_store_path, StoreConfig};
pub use operations::Store;
