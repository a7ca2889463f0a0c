//! The reservation record kind.
//!
//! Reservations carry half-open `[start, end)` intervals: the end instant
//! is excluded, so a reservation ending at 11:00 and one starting at 11:00
//! on the same device do not overlap. Admission control on top of these
//! records lives in [`Scheduler`](crate::Scheduler).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Entity, ValidationError};

/// A reservation of a device by a user over a half-open time interval.
///
/// Constructed through [`Reservation::builder`], which validates the ids
/// and rejects inverted or empty intervals.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use devpool::Reservation;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
///
/// let reservation = Reservation::builder("r1", "Cam-1", "u1", start, end)
///     .note(Some("field trip".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.device_name(), "Cam-1");
/// assert!(reservation.contains_instant(start));
/// assert!(!reservation.contains_instant(end));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    reservation_id: String,
    device_name: String,
    user_id: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    note: Option<String>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        reservation_id: impl Into<String>,
        device_name: impl Into<String>,
        user_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ReservationBuilder {
        ReservationBuilder {
            reservation_id: reservation_id.into(),
            device_name: device_name.into(),
            user_id: user_id.into(),
            start,
            end,
            note: None,
        }
    }

    /// Returns the unique reservation id.
    #[must_use]
    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    /// Returns the name of the reserved device.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns the id of the reserving user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the inclusive start of the interval.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the exclusive end of the interval.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the optional free-text note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Checks whether this reservation's interval overlaps `[start, end)`.
    ///
    /// Two half-open intervals overlap iff neither ends at or before the
    /// other starts, so back-to-back intervals do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use devpool::Reservation;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
    ///
    /// let reservation = Reservation::builder("r1", "Cam-1", "u1", at(9), at(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(reservation.overlaps(at(9), at(11)));
    /// assert!(!reservation.overlaps(at(10), at(11)));
    /// ```
    #[must_use]
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !(self.end <= start || end <= self.start)
    }

    /// Checks whether the given instant falls inside `[start, end)`.
    #[must_use]
    pub fn contains_instant(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} for {} from {} to {}",
            self.reservation_id, self.device_name, self.user_id, self.start, self.end
        )
    }
}

impl Entity for Reservation {
    const COLLECTION: &'static str = "reservations";
    const KEY_FIELD: &'static str = "reservation_id";

    fn key(&self) -> &str {
        &self.reservation_id
    }
}

/// Builder for creating [`Reservation`] instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    reservation_id: String,
    device_name: String,
    user_id: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    note: Option<String>,
}

impl ReservationBuilder {
    /// Sets the optional note.
    ///
    /// The note is trimmed; a note that is empty after trimming is
    /// treated as absent.
    #[must_use]
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if any id is empty after trimming, or if the
    /// interval is inverted or empty (`end <= start`).
    pub fn build(self) -> Result<Reservation, ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError {
                field: "end".into(),
                message: format!("must be after start ({} <= {})", self.end, self.start),
            });
        }
        Ok(Reservation {
            reservation_id: require_non_empty("reservation_id", &self.reservation_id)?,
            device_name: require_non_empty("device_name", &self.device_name)?,
            user_id: require_non_empty("user_id", &self.user_id)?,
            start: self.start,
            end: self.end,
            note: self.note,
        })
    }
}
