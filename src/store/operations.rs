//! The identity-keyed store and its CRUD operations.

use serde_json::Value;

use crate::entity::Entity;
use crate::error::Result;

use super::config::StoreConfig;
use super::document::Document;

/// An identity-keyed document store over named collections of records.
///
/// The store is an explicitly constructed value: open one and pass it by
/// reference to whatever needs persistence. Every mutating operation
/// rewrites the backing file before returning, so the on-disk document
/// always reflects the last completed call. All operations are keyed by
/// the [`Entity`] declarations of the record kind, which is selected by
/// the type parameter at the call site.
///
/// There is no locking: the store assumes a single process and relies on
/// Rust's borrow rules to serialize access within it (see
/// [`Scheduler`](crate::Scheduler) for how admission control leans on
/// this).
///
/// # Examples
///
/// ```no_run
/// use devpool::{Store, StoreConfig, User};
///
/// let mut store = Store::open(StoreConfig::new("/tmp/devpool.json")).unwrap();
///
/// let user = User::new("u1", "Ada").unwrap();
/// store.upsert(&user).unwrap();
///
/// let users: Vec<User> = store.find_all();
/// assert_eq!(users.len(), 1);
/// ```
#[derive(Debug)]
pub struct Store {
    document: Document,
    config: StoreConfig,
}

impl Store {
    /// Opens a store, loading the data file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it is
    /// missing and `auto_create` is disabled.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let document = Document::load(&config)?;
        Ok(Self { document, config })
    }

    /// Returns the configuration the store was opened with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Inserts the entity, or replaces the stored record that shares its
    /// unique key.
    ///
    /// Replacement swaps the full record contents in place, preserving the
    /// record's position in the collection. All in-memory fields of the
    /// entity are serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the data file cannot be
    /// written.
    pub fn upsert<E: Entity>(&mut self, entity: &E) -> Result<()> {
        let record = entity.encode()?;
        let key = Value::String(entity.key().to_string());
        let records = self.document.records_mut(E::COLLECTION);

        if let Some(existing) = records
            .iter_mut()
            .find(|existing| existing.get(E::KEY_FIELD) == Some(&key))
        {
            log::debug!("replacing '{}' in {}", entity.key(), E::COLLECTION);
            *existing = record;
        } else {
            log::debug!("inserting '{}' into {}", entity.key(), E::COLLECTION);
            records.push(record);
        }
        self.document.persist(&self.config)
    }

    /// Decodes every record of the entity's collection.
    ///
    /// Records that fail to decode are skipped with a warning rather than
    /// failing the listing, so one corrupt record cannot take down an
    /// entire view.
    #[must_use]
    pub fn find_all<E: Entity>(&self) -> Vec<E> {
        self.document
            .records(E::COLLECTION)
            .iter()
            .filter_map(|record| match E::decode(record) {
                Ok(entity) => Some(entity),
                Err(err) => {
                    log::warn!("skipping undecodable record: {err}");
                    None
                }
            })
            .collect()
    }

    /// Returns up to `limit` decoded records whose `field` equals `value`.
    ///
    /// Records are returned in storage order; no further ordering is
    /// guaranteed. Matching records that fail to decode are skipped.
    #[must_use]
    pub fn find_by_field<E: Entity>(&self, field: &str, value: &Value, limit: usize) -> Vec<E> {
        self.document
            .records(E::COLLECTION)
            .iter()
            .filter(|record| record.get(field) == Some(value))
            .filter_map(|record| match E::decode(record) {
                Ok(entity) => Some(entity),
                Err(err) => {
                    log::warn!("skipping undecodable record: {err}");
                    None
                }
            })
            .take(limit)
            .collect()
    }

    /// Returns the record whose unique key equals `key`, if present and
    /// decodable.
    #[must_use]
    pub fn find_by_key<E: Entity>(&self, key: &str) -> Option<E> {
        self.find_by_field(E::KEY_FIELD, &Value::String(key.to_string()), 1)
            .pop()
    }

    /// Removes at most one record whose `field` equals `value`.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn delete_by_field<E: Entity>(&mut self, field: &str, value: &Value) -> Result<bool> {
        let records = self.document.records_mut(E::COLLECTION);
        let Some(index) = records
            .iter()
            .position(|record| record.get(field) == Some(value))
        else {
            return Ok(false);
        };
        records.remove(index);
        log::debug!("removed record from {} where {field} = {value}", E::COLLECTION);
        self.document.persist(&self.config)?;
        Ok(true)
    }

    /// Removes the record whose unique key equals `key`.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn delete_by_key<E: Entity>(&mut self, key: &str) -> Result<bool> {
        self.delete_by_field::<E>(E::KEY_FIELD, &Value::String(key.to_string()))
    }
}
