//! Error types for the devpool library.
//!
//! This module provides the error hierarchy for all operations in the
//! devpool library, using `thiserror` for ergonomic error handling.
//!
//! Conflicts (duplicate keys, scheduling overlaps) and missed deletes are
//! deliberately *not* errors: those operations report `Ok(false)` so the
//! caller can present an actionable message without unwinding.

use thiserror::Error;

use crate::entity::device::DeviceState;
use crate::entity::{DecodeError, ValidationError};

/// Result type alias for operations that may fail with a devpool error.
///
/// # Examples
///
/// ```
/// use devpool::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the devpool library.
///
/// This enum encompasses all failure conditions that surface as errors:
/// malformed input, illegal device transitions, and storage faults.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A device lifecycle operation was attempted from a state that does
    /// not permit it.
    #[error("illegal device transition: cannot {operation} while {state}")]
    IllegalTransition {
        /// The transition that was attempted.
        operation: String,
        /// The state the device was in.
        state: DeviceState,
    },

    /// A stored record could not be decoded into its entity type.
    #[error("decode error in '{collection}': {message}")]
    Decode {
        /// The collection the record was read from.
        collection: String,
        /// A description of the decode failure.
        message: String,
    },

    /// A storage serialization error occurred.
    #[error("storage error: {0}")]
    Storage(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode {
            collection: err.collection.to_string(),
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use devpool::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "id".into(),
    ///     message: "must be non-empty".into(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error is an illegal device transition.
    #[must_use]
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}
