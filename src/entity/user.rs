//! The user record kind.

use serde::{Deserialize, Serialize};

use super::{require_non_empty, Entity, ValidationError};

/// A user of the device pool, identified by a unique id string.
///
/// Users are soft-referenced by devices (as manager) and by reservations;
/// nothing at the storage level enforces those references. Callers that
/// delete a user are expected to check first that no device still names
/// them as manager, e.g. via
/// [`Store::find_by_field`](crate::Store::find_by_field) over the
/// `managed_by_user_id` field.
///
/// # Examples
///
/// ```
/// use devpool::User;
///
/// let user = User::new("u1", "Ada Lovelace").unwrap();
/// assert_eq!(user.id, "u1");
///
/// // Empty ids are rejected.
/// assert!(User::new("", "Ada Lovelace").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a new user.
    ///
    /// Both fields are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or `name` is empty after trimming.
    pub fn new(id: impl AsRef<str>, name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_non_empty("id", id.as_ref())?,
            name: require_non_empty("name", name.as_ref())?,
        })
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &str {
        &self.id
    }
}
