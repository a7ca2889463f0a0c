//! Integration tests for reservation admission control.

mod common;

use anyhow::Result;
use common::{at, open_temp_store, ReservationFixture};
use devpool::{Device, Scheduler, User};

#[test]
fn no_two_stored_reservations_overlap() -> Result<()> {
    let (_dir, mut store) = open_temp_store();
    let mut scheduler = Scheduler::new(&mut store);

    // Throw a mix of conflicting and free intervals at one device.
    let requests = [
        ("r1", 9, 11),
        ("r2", 10, 12), // conflicts with r1
        ("r3", 11, 13),
        ("r4", 12, 14), // conflicts with r3
        ("r5", 13, 15),
        ("r6", 8, 16), // conflicts with everything stored so far
    ];
    for (id, start, end) in requests {
        let reservation = ReservationFixture::new()
            .with_id(id)
            .with_hours(start, end)
            .build();
        scheduler.create(&reservation)?;
    }

    let stored = scheduler.find_by_device("Cam-1");
    assert_eq!(stored.len(), 3);
    for a in &stored {
        for b in &stored {
            if a.reservation_id() != b.reservation_id() {
                assert!(
                    !a.overlaps(b.start(), b.end()),
                    "{a} overlaps {b}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn duplicate_id_never_mutates_stored_state() -> Result<()> {
    let (_dir, mut store) = open_temp_store();
    let mut scheduler = Scheduler::new(&mut store);

    let original = ReservationFixture::new().with_hours(9, 10).build();
    assert!(scheduler.create(&original)?);

    let replay = ReservationFixture::new()
        .with_hours(14, 15)
        .with_note("attempted rebook")
        .build();
    assert!(!scheduler.create(&replay)?);

    let stored = scheduler.find_all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], original);
    Ok(())
}

#[test]
fn degenerate_intervals_always_unavailable() {
    let (_dir, mut store) = open_temp_store();
    let scheduler = Scheduler::new(&mut store);

    assert!(!scheduler.is_available("Cam-1", at(10), at(10)));
    assert!(!scheduler.is_available("Cam-1", at(12), at(10)));
    // Even on a device with no reservations at all.
    assert!(!scheduler.is_available("never-seen", at(12), at(10)));
}

#[test]
fn back_to_back_bookings_coexist() -> Result<()> {
    let (_dir, mut store) = open_temp_store();
    let mut scheduler = Scheduler::new(&mut store);

    let first = ReservationFixture::new().with_id("r1").with_hours(9, 10).build();
    assert!(scheduler.create(&first)?);

    let adjacent = ReservationFixture::new().with_id("r2").with_hours(10, 11).build();
    assert!(scheduler.create(&adjacent)?);

    // 09:30-10:30 straddles the boundary and must be rejected.
    let straddle = devpool::Reservation::builder(
        "r3",
        "Cam-1",
        "u1",
        at(9) + chrono::Duration::minutes(30),
        at(10) + chrono::Duration::minutes(30),
    )
    .build()?;
    assert!(!scheduler.create(&straddle)?);
    Ok(())
}

#[test]
fn end_to_end_reserve_delete_rebook() -> Result<()> {
    let (_dir, mut store) = open_temp_store();

    // Set up the pool: one manager, one device.
    store.upsert(&User::new("u1", "Ada")?)?;
    store.upsert(&Device::new("Cam-1", "u1")?)?;

    let mut scheduler = Scheduler::new(&mut store);

    let r1 = ReservationFixture::new().with_id("R1").with_hours(10, 12).build();
    assert!(scheduler.create(&r1)?);

    let r2 = ReservationFixture::new().with_id("R2").with_hours(11, 13).build();
    assert!(!scheduler.create(&r2)?, "overlapping booking must fail");

    assert!(scheduler.delete_by_id("R1")?);
    assert!(scheduler.create(&r2)?, "freed interval must be bookable");

    let stored = scheduler.find_by_device("Cam-1");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].reservation_id(), "R2");
    Ok(())
}

#[test]
fn admission_survives_reopen() -> Result<()> {
    let (_dir, mut store) = open_temp_store();
    let config = store.config().clone();

    let mut scheduler = Scheduler::new(&mut store);
    let r1 = ReservationFixture::new().with_hours(9, 11).build();
    assert!(scheduler.create(&r1)?);
    drop(scheduler);
    drop(store);

    // A fresh process sees the booking and still refuses the overlap.
    let mut reopened = devpool::Store::open(config)?;
    let mut scheduler = Scheduler::new(&mut reopened);
    assert!(!scheduler.is_available("Cam-1", at(10), at(12)));
    let r2 = ReservationFixture::new().with_id("r2").with_hours(10, 12).build();
    assert!(!scheduler.create(&r2)?);
    Ok(())
}

#[test]
fn reservations_per_device_are_independent() -> Result<()> {
    let (_dir, mut store) = open_temp_store();
    let mut scheduler = Scheduler::new(&mut store);

    for device in ["Cam-1", "Cam-2", "Tripod-1"] {
        let reservation = ReservationFixture::new()
            .with_id(format!("{device}-booking"))
            .with_device(device)
            .with_hours(9, 17)
            .build();
        assert!(scheduler.create(&reservation)?);
    }

    assert_eq!(scheduler.find_all().len(), 3);
    assert_eq!(scheduler.find_by_device("Cam-2").len(), 1);
    Ok(())
}

#[test]
fn active_reservation_is_live_scan_not_device_state() -> Result<()> {
    let (_dir, mut store) = open_temp_store();

    // The device record stays `available` even while a reservation
    // covers the current instant; the two views are independent.
    let device = Device::new("Cam-1", "u1")?;
    store.upsert(&device)?;

    let mut scheduler = Scheduler::new(&mut store);
    let reservation = ReservationFixture::new().with_hours(10, 12).build();
    assert!(scheduler.create(&reservation)?);

    assert!(scheduler.active_reservation("Cam-1", at(11)).is_some());
    assert!(scheduler.active_reservation("Cam-1", at(12)).is_none());

    let stored: Device = scheduler_store_device(&store);
    assert_eq!(stored.state(), devpool::DeviceState::Available);
    Ok(())
}

fn scheduler_store_device(store: &devpool::Store) -> Device {
    store.find_by_key("Cam-1").expect("device present")
}
