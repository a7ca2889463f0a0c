#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # devpool
//!
//! A library for managing a shared device pool: users, devices,
//! maintenance records, and conflict-free reservations.
//!
//! The library is the core behind an administrative front end (forms and
//! listings, out of scope here). It provides an identity-keyed document
//! store over a single JSON file, a uniform [`Entity`] contract for the
//! persisted record kinds, a reservation [`Scheduler`] that guarantees no
//! device is double-booked across overlapping time windows, and a device
//! lifecycle state machine on [`Device`].
//!
//! ## Core Types
//!
//! - [`Store`] and [`StoreConfig`]: persistence over named collections
//! - [`Entity`]: the contract every persisted record kind implements
//! - [`User`], [`Device`], [`Maintenance`], [`Reservation`]: record kinds
//! - [`Scheduler`]: interval-exclusive reservation admission
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use devpool::{Device, Reservation, Scheduler, Store, StoreConfig, User};
//!
//! let mut store = Store::open(StoreConfig::new("/tmp/devpool.json")).unwrap();
//!
//! store.upsert(&User::new("u1", "Ada").unwrap()).unwrap();
//! store.upsert(&Device::new("Cam-1", "u1").unwrap()).unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let reservation = Reservation::builder(
//!     "r1",
//!     "Cam-1",
//!     "u1",
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//!     day.and_hms_opt(12, 0, 0).unwrap(),
//! )
//! .build()
//! .unwrap();
//!
//! let mut scheduler = Scheduler::new(&mut store);
//! assert!(scheduler.create(&reservation).unwrap());
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use entity::{
    DecodeError, Device, DeviceState, Entity, Maintenance, Reservation, ReservationBuilder, User,
    ValidationError,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use scheduler::Scheduler;
pub use store::{default_data_dir, resolve_store_path, Store, StoreConfig};
