//! The maintenance record kind.

use serde::{Deserialize, Serialize};

use super::{require_non_empty, Entity, ValidationError};

/// A maintenance record for a device.
///
/// Records soft-reference the device by name. The cost defaults to zero
/// when absent from a stored record, matching older data files that did
/// not track costs.
///
/// # Examples
///
/// ```
/// use devpool::Maintenance;
///
/// let record = Maintenance::new("m1", "Cam-1", "sensor cleaning", 49.90).unwrap();
/// assert_eq!(record.cost, 49.90);
///
/// // Negative costs are rejected.
/// assert!(Maintenance::new("m2", "Cam-1", "broken lens", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Unique identifier for the maintenance record.
    pub maintenance_id: String,
    /// Name of the device this record belongs to.
    pub device_name: String,
    /// What was (or is to be) done.
    pub description: String,
    /// Cost of the maintenance, non-negative.
    #[serde(default)]
    pub cost: f64,
}

impl Maintenance {
    /// Creates a new maintenance record.
    ///
    /// # Errors
    ///
    /// Returns an error if the id, device name, or description is empty
    /// after trimming, or if the cost is negative or not finite.
    pub fn new(
        maintenance_id: impl AsRef<str>,
        device_name: impl AsRef<str>,
        description: impl AsRef<str>,
        cost: f64,
    ) -> Result<Self, ValidationError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(ValidationError {
                field: "cost".into(),
                message: format!("must be a non-negative number, got {cost}"),
            });
        }
        Ok(Self {
            maintenance_id: require_non_empty("maintenance_id", maintenance_id.as_ref())?,
            device_name: require_non_empty("device_name", device_name.as_ref())?,
            description: require_non_empty("description", description.as_ref())?,
            cost,
        })
    }

    /// Sums the costs of a set of maintenance records.
    ///
    /// Pair this with [`Store::find_by_field`](crate::Store::find_by_field)
    /// for a per-device total or [`Store::find_all`](crate::Store::find_all)
    /// for the whole pool.
    ///
    /// # Examples
    ///
    /// ```
    /// use devpool::Maintenance;
    ///
    /// let records = vec![
    ///     Maintenance::new("m1", "Cam-1", "cleaning", 10.0).unwrap(),
    ///     Maintenance::new("m2", "Cam-1", "new strap", 5.5).unwrap(),
    /// ];
    /// assert!((Maintenance::total_cost(&records) - 15.5).abs() < f64::EPSILON);
    /// ```
    pub fn total_cost<'a>(records: impl IntoIterator<Item = &'a Maintenance>) -> f64 {
        records.into_iter().map(|record| record.cost).sum()
    }
}

impl std::fmt::Display for Maintenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {}: {} ({:.2})",
            self.maintenance_id, self.device_name, self.description, self.cost
        )
    }
}

impl Entity for Maintenance {
    const COLLECTION: &'static str = "maintenances";
    const KEY_FIELD: &'static str = "maintenance_id";

    fn key(&self) -> &str {
        &self.maintenance_id
    }
}
