//! The device record kind and its lifecycle state machine.
//!
//! A device's operational state is advisory bookkeeping: the reservation
//! scheduler keeps its own interval bookkeeping and never consults
//! [`DeviceState`], and the transitions here never consult stored
//! reservations. "Currently reserved" for display purposes is computed by
//! [`Scheduler::active_reservation`](crate::Scheduler::active_reservation),
//! not by trusting `state`. The two views are tracked independently.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{require_non_empty, Entity, ValidationError};

/// The operational state of a device.
///
/// # Examples
///
/// ```
/// use devpool::DeviceState;
///
/// assert_eq!(format!("{}", DeviceState::Maintenance), "maintenance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    /// The device can be reserved or sent to maintenance.
    Available,
    /// The device is marked as handed out.
    Reserved,
    /// The device is undergoing maintenance.
    Maintenance,
    /// The device has been taken out of the pool.
    Inactive,
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Reserved => write!(f, "reserved"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// A device in the shared pool.
///
/// Devices are identified by their name and soft-reference the user that
/// manages them. The `created_at` timestamp is set once at construction
/// and has no setter. State is only mutable through the lifecycle
/// transition methods, which also keep the `is_active` flag consistent
/// with the `Inactive` state.
///
/// # Examples
///
/// ```
/// use devpool::{Device, DeviceState};
///
/// let mut device = Device::new("Cam-1", "u1").unwrap();
/// assert_eq!(device.state(), DeviceState::Available);
///
/// device.reserve().unwrap();
/// assert_eq!(device.state(), DeviceState::Reserved);
///
/// // Reserving twice without a release fails.
/// assert!(device.reserve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    device_name: String,
    managed_by_user_id: String,
    is_active: bool,
    state: DeviceState,
    created_at: NaiveDateTime,
}

impl Device {
    /// Creates a new device in the `Available` state.
    ///
    /// The creation timestamp is taken from the current UTC wall clock,
    /// stored timezone-naive.
    ///
    /// # Errors
    ///
    /// Returns an error if the device name or manager id is empty after
    /// trimming.
    pub fn new(
        device_name: impl AsRef<str>,
        managed_by_user_id: impl AsRef<str>,
    ) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            device_name: require_non_empty("device_name", device_name.as_ref())?,
            managed_by_user_id: require_non_empty(
                "managed_by_user_id",
                managed_by_user_id.as_ref(),
            )?,
            is_active: true,
            state: DeviceState::Available,
            created_at: Utc::now().naive_utc(),
        })
    }

    /// Returns the device name.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns the id of the user managing this device.
    #[must_use]
    pub fn managed_by_user_id(&self) -> &str {
        &self.managed_by_user_id
    }

    /// Returns whether the device is part of the active pool.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DeviceState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Reassigns the managing user.
    ///
    /// # Errors
    ///
    /// Returns an error if the new manager id is empty after trimming.
    pub fn set_managed_by(
        &mut self,
        user_id: impl AsRef<str>,
    ) -> std::result::Result<(), ValidationError> {
        self.managed_by_user_id = require_non_empty("managed_by_user_id", user_id.as_ref())?;
        Ok(())
    }

    /// Marks the device as handed out.
    ///
    /// # Errors
    ///
    /// Fails unless the device is `Available`.
    pub fn reserve(&mut self) -> Result<()> {
        self.transition("reserve", &[DeviceState::Available], DeviceState::Reserved)
    }

    /// Returns a handed-out device to the pool.
    ///
    /// # Errors
    ///
    /// Fails unless the device is `Reserved`.
    pub fn release(&mut self) -> Result<()> {
        self.transition("release", &[DeviceState::Reserved], DeviceState::Available)
    }

    /// Sends the device to maintenance.
    ///
    /// # Errors
    ///
    /// Fails unless the device is `Available` or `Reserved`.
    pub fn start_maintenance(&mut self) -> Result<()> {
        self.transition(
            "start_maintenance",
            &[DeviceState::Available, DeviceState::Reserved],
            DeviceState::Maintenance,
        )
    }

    /// Returns the device from maintenance to the pool.
    ///
    /// # Errors
    ///
    /// Fails unless the device is in `Maintenance`.
    pub fn end_maintenance(&mut self) -> Result<()> {
        self.transition(
            "end_maintenance",
            &[DeviceState::Maintenance],
            DeviceState::Available,
        )
    }

    /// Takes the device out of the pool. Allowed from any state.
    pub fn deactivate(&mut self) {
        self.state = DeviceState::Inactive;
        self.is_active = false;
    }

    /// Returns an inactive device to the pool.
    ///
    /// # Errors
    ///
    /// Fails unless the device is `Inactive`.
    pub fn activate(&mut self) -> Result<()> {
        self.transition("activate", &[DeviceState::Inactive], DeviceState::Available)?;
        self.is_active = true;
        Ok(())
    }

    fn transition(
        &mut self,
        operation: &str,
        valid_from: &[DeviceState],
        target: DeviceState,
    ) -> Result<()> {
        if valid_from.contains(&self.state) {
            self.state = target;
            Ok(())
        } else {
            Err(Error::IllegalTransition {
                operation: operation.to_string(),
                state: self.state,
            })
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] (managed by {})",
            self.device_name, self.state, self.managed_by_user_id
        )
    }
}

impl Entity for Device {
    const COLLECTION: &'static str = "devices";
    const KEY_FIELD: &'static str = "device_name";

    fn key(&self) -> &str {
        &self.device_name
    }
}
