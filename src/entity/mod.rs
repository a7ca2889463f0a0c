//! Persisted record kinds and the contract they share.
//!
//! Every record kind stored by devpool (users, devices, maintenance
//! records, reservations) implements the [`Entity`] trait: a collection
//! name, a unique key field, and serde-backed encoding to and from the
//! flat field-maps of the persisted document. The store uses these three
//! declarations to provide generic CRUD without per-kind duplication.

pub mod device;
pub mod maintenance;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod proptests;

pub use device::{Device, DeviceState};
pub use maintenance::Maintenance;
pub use reservation::{Reservation, ReservationBuilder};
pub use user::User;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// The contract every persisted record kind implements.
///
/// An entity declares where its records live (`COLLECTION`), which field
/// uniquely identifies a record (`KEY_FIELD`), and how to read that field
/// off an instance (`key`). Encoding and decoding are provided on top of
/// the type's serde implementation: persisting an entity serializes *all*
/// of its in-memory fields, so transient state must never be added to an
/// entity type.
///
/// # Examples
///
/// ```
/// use devpool::{Entity, User};
///
/// let user = User::new("u1", "Ada").unwrap();
/// assert_eq!(User::COLLECTION, "users");
/// assert_eq!(User::KEY_FIELD, "id");
/// assert_eq!(user.key(), "u1");
///
/// let record = user.encode().unwrap();
/// let decoded = User::decode(&record).unwrap();
/// assert_eq!(decoded, user);
/// ```
pub trait Entity: Serialize + DeserializeOwned {
    /// The name of the collection this entity kind is stored in.
    const COLLECTION: &'static str;

    /// The field that uniquely identifies a record of this kind.
    const KEY_FIELD: &'static str;

    /// Returns the value of the unique key field for this instance.
    fn key(&self) -> &str;

    /// Encodes this entity into a flat field-map for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails. This does not happen for
    /// the entity kinds shipped with this crate.
    fn encode(&self) -> crate::error::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(crate::error::Error::Storage(
                <serde_json::Error as serde::ser::Error>::custom(
                    "entity did not serialize to a JSON object",
                ),
            )),
        }
    }

    /// Decodes an untyped field-map into a typed entity.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if required fields are missing or have
    /// invalid values (e.g. an unknown device state). Bulk listings skip
    /// such records instead of surfacing this error; see
    /// [`Store::find_all`](crate::Store::find_all).
    fn decode(record: &Map<String, Value>) -> Result<Self, DecodeError> {
        serde_json::from_value(Value::Object(record.clone())).map_err(|err| DecodeError {
            collection: Self::COLLECTION,
            message: err.to_string(),
        })
    }
}

/// Error type for records that fail to map to their entity type.
///
/// # Examples
///
/// ```
/// use devpool::{Entity, User};
/// use serde_json::Map;
///
/// let err = User::decode(&Map::new()).unwrap_err();
/// assert_eq!(err.collection, "users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// The collection the record belongs to.
    pub collection: &'static str,
    /// A description of the decode failure.
    pub message: String,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "decode error in '{}': {}", self.collection, self.message)
    }
}

impl std::error::Error for DecodeError {}

/// Error type for validation failures in entity constructors and builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates that a required string field is non-empty after trimming.
///
/// Returns the trimmed value.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: "must be non-empty after trimming whitespace".into(),
        });
    }
    Ok(trimmed.to_string())
}
