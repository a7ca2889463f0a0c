//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the devpool library.

use chrono::{NaiveDate, NaiveDateTime};
use devpool::{Reservation, Store, StoreConfig};
use tempfile::TempDir;

/// Opens a store backed by a file in a fresh temporary directory.
///
/// The directory handle is returned alongside the store; keep it alive
/// for the duration of the test.
#[allow(dead_code)]
pub fn open_temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = StoreConfig::new(dir.path().join("devpool.json"));
    let store = Store::open(config).expect("open store");
    (dir, store)
}

/// Returns an instant on 2025-01-01 at the given hour.
#[allow(dead_code)]
pub fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Builder for creating test reservations with sensible defaults.
///
/// Defaults: id "r1", device "Cam-1", user "u1", 10:00-12:00 on
/// 2025-01-01, no note.
#[allow(dead_code)]
pub struct ReservationFixture {
    id: String,
    device: String,
    user: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    note: Option<String>,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            id: "r1".to_string(),
            device: "Cam-1".to_string(),
            user: "u1".to_string(),
            start: at(10),
            end: at(12),
            note: None,
        }
    }

    /// Sets the reservation id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the device name.
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    /// Sets the reserving user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the interval to `[start_hour, end_hour)` on 2025-01-01.
    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start = at(start_hour);
        self.end = at(end_hour);
        self
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Builds the reservation.
    pub fn build(self) -> Reservation {
        Reservation::builder(self.id, self.device, self.user, self.start, self.end)
            .note(self.note)
            .build()
            .expect("build test reservation")
    }
}
