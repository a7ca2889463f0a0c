//! Reservation admission control.
//!
//! The scheduler is a pure validation/query layer over the store: it keeps
//! no state of its own beyond the reservation records themselves. Its one
//! correctness property is interval exclusivity per device: no two stored
//! reservations for the same device may overlap under half-open
//! `[start, end)` semantics.
//!
//! Check-then-insert admission must not interleave with other writers.
//! The scheduler borrows the store mutably for its whole lifetime, so
//! within a process no other store access can occur between the
//! availability check and the insert. Callers that share a store across
//! threads get the same guarantee by wrapping it in a mutex and
//! constructing the scheduler inside the critical section.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::entity::Reservation;
use crate::error::Result;
use crate::store::Store;

/// Admission control for device reservations.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use devpool::{Reservation, Scheduler, Store, StoreConfig};
///
/// let mut store = Store::open(StoreConfig::new("/tmp/devpool.json")).unwrap();
/// let mut scheduler = Scheduler::new(&mut store);
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let reservation = Reservation::builder(
///     "r1",
///     "Cam-1",
///     "u1",
///     day.and_hms_opt(10, 0, 0).unwrap(),
///     day.and_hms_opt(12, 0, 0).unwrap(),
/// )
/// .build()
/// .unwrap();
///
/// assert!(scheduler.create(&reservation).unwrap());
/// // The same interval is now taken.
/// assert!(!scheduler.is_available("Cam-1", reservation.start(), reservation.end()));
/// ```
#[derive(Debug)]
pub struct Scheduler<'a> {
    store: &'a mut Store,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler over the given store.
    #[must_use]
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Checks whether `[start, end)` is free on the given device.
    ///
    /// Degenerate intervals (`end <= start`) are never available,
    /// regardless of existing data. Back-to-back intervals do not
    /// conflict: a reservation ending at 11:00 leaves 11:00 free as a
    /// start instant.
    #[must_use]
    pub fn is_available(&self, device_name: &str, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        if end <= start {
            return false;
        }
        !self
            .reservations_for(device_name)
            .iter()
            .any(|existing| existing.overlaps(start, end))
    }

    /// Admits a reservation if its id is unused and its interval is free.
    ///
    /// Returns `Ok(true)` after inserting the record, `Ok(false)` if the
    /// id already exists or the interval conflicts, in which case nothing
    /// is stored. The check and the insert happen under the same exclusive
    /// store borrow.
    ///
    /// # Errors
    ///
    /// Returns an error only if the data file cannot be written.
    pub fn create(&mut self, reservation: &Reservation) -> Result<bool> {
        if self
            .store
            .find_by_key::<Reservation>(reservation.reservation_id())
            .is_some()
        {
            log::debug!(
                "rejecting reservation '{}': id already exists",
                reservation.reservation_id()
            );
            return Ok(false);
        }

        if !self.is_available(
            reservation.device_name(),
            reservation.start(),
            reservation.end(),
        ) {
            log::debug!(
                "rejecting reservation '{}': {} is not free from {} to {}",
                reservation.reservation_id(),
                reservation.device_name(),
                reservation.start(),
                reservation.end()
            );
            return Ok(false);
        }

        self.store.upsert(reservation)?;
        Ok(true)
    }

    /// Removes the reservation with the given id.
    ///
    /// Returns whether a reservation was found and removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn delete_by_id(&mut self, reservation_id: &str) -> Result<bool> {
        self.store.delete_by_key::<Reservation>(reservation_id)
    }

    /// Returns all stored reservations.
    #[must_use]
    pub fn find_all(&self) -> Vec<Reservation> {
        self.store.find_all()
    }

    /// Returns all reservations for the given device, in storage order.
    #[must_use]
    pub fn find_by_device(&self, device_name: &str) -> Vec<Reservation> {
        self.reservations_for(device_name)
    }

    /// Returns the reservation covering the given instant on the device,
    /// if any.
    ///
    /// This is the live-scan answer to "is this device currently
    /// reserved", independent of the advisory
    /// [`DeviceState`](crate::DeviceState) on the device record. With
    /// interval exclusivity holding, at most one reservation can cover an
    /// instant.
    #[must_use]
    pub fn active_reservation(
        &self,
        device_name: &str,
        at: NaiveDateTime,
    ) -> Option<Reservation> {
        self.reservations_for(device_name)
            .into_iter()
            .find(|reservation| reservation.contains_instant(at))
    }

    fn reservations_for(&self, device_name: &str) -> Vec<Reservation> {
        self.store.find_by_field(
            "device_name",
            &Value::String(device_name.to_string()),
            usize::MAX,
        )
    }
}
