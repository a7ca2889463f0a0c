//! Shared test utilities for store unit tests.

use tempfile::tempdir;

use super::{Store, StoreConfig};

/// Creates a store backed by a file in a temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory or store cannot be created. This is
/// acceptable in test code where we want to fail fast.
#[must_use]
pub(crate) fn create_test_store() -> Store {
    let dir = tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("devpool.json"));
    let store = Store::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    store
}
