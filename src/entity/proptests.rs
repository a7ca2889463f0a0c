//! Property-based tests for entity types.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use super::{Device, Entity, Maintenance, Reservation, User};

// Strategy for generating identifier strings
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,14}"
}

// Strategy for generating timestamps within a few years of 2025
fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..1500, 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(u64::try_from(day).unwrap()))
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    })
}

// Strategy for generating well-formed half-open intervals
fn interval_strategy() -> impl Strategy<Value = (NaiveDateTime, NaiveDateTime)> {
    (instant_strategy(), instant_strategy())
        .prop_filter("interval must be non-empty", |(a, b)| a != b)
        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) })
}

proptest! {
    // Overlap is symmetric: A overlaps B iff B overlaps A.
    #[test]
    fn overlap_is_symmetric(
        (a_start, a_end) in interval_strategy(),
        (b_start, b_end) in interval_strategy(),
    ) {
        let a = Reservation::builder("a", "dev", "u1", a_start, a_end).build().unwrap();
        let b = Reservation::builder("b", "dev", "u1", b_start, b_end).build().unwrap();
        prop_assert_eq!(a.overlaps(b_start, b_end), b.overlaps(a_start, a_end));
    }

    // An interval always overlaps itself.
    #[test]
    fn interval_overlaps_itself((start, end) in interval_strategy()) {
        let r = Reservation::builder("r", "dev", "u1", start, end).build().unwrap();
        prop_assert!(r.overlaps(start, end));
    }

    // Abutting intervals never overlap, in either direction.
    #[test]
    fn abutting_intervals_do_not_overlap(
        (start, end) in interval_strategy(),
        (next_start, next_end) in interval_strategy(),
    ) {
        let r = Reservation::builder("r", "dev", "u1", start, end).build().unwrap();
        // Translate the second interval so it starts exactly at `end`.
        let shifted_end = end + (next_end - next_start);
        prop_assert!(!r.overlaps(end, shifted_end));
    }

    // contains_instant agrees with the half-open bounds.
    #[test]
    fn contains_instant_matches_bounds(
        (start, end) in interval_strategy(),
        at in instant_strategy(),
    ) {
        let r = Reservation::builder("r", "dev", "u1", start, end).build().unwrap();
        prop_assert_eq!(r.contains_instant(at), start <= at && at < end);
    }

    // Every entity kind round-trips through encode/decode.
    #[test]
    fn user_round_trips(id in id_strategy(), name in id_strategy()) {
        let user = User::new(&id, &name).unwrap();
        let decoded = User::decode(&user.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, user);
    }

    #[test]
    fn device_round_trips(name in id_strategy(), manager in id_strategy()) {
        let device = Device::new(&name, &manager).unwrap();
        let decoded = Device::decode(&device.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, device);
    }

    #[test]
    fn maintenance_round_trips(
        id in id_strategy(),
        device in id_strategy(),
        cost in 0.0f64..100_000.0,
    ) {
        let record = Maintenance::new(&id, &device, "work", cost).unwrap();
        let decoded = Maintenance::decode(&record.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn reservation_round_trips(
        id in id_strategy(),
        device in id_strategy(),
        user in id_strategy(),
        (start, end) in interval_strategy(),
    ) {
        let r = Reservation::builder(&id, &device, &user, start, end).build().unwrap();
        let decoded = Reservation::decode(&r.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, r);
    }

    // Inverted intervals are always rejected by the builder.
    #[test]
    fn inverted_intervals_rejected((start, end) in interval_strategy()) {
        prop_assert!(Reservation::builder("r", "dev", "u1", end, start).build().is_err());
    }
}
