//! # Booking Conflict Checker
//!
//! A driver or a truck can be on at most one in-progress trip. This check runs after the
//! candidate has been resolved and before it is accepted; a candidate that produces any
//! error must be neither stored nor cascaded.

use fleetsync_common::error::{FieldError, TripField};
use fleetsync_common::fleet::{Trip, TripId};

pub const DRIVER_BUSY: &str = "The selected driver already has a trip in progress";
pub const TRUCK_BUSY: &str = "The selected truck is already on a trip";

/// Returns the field errors for `candidate` against `existing`.
///
/// Only in-progress candidates can conflict. `exclude` is the id of the trip being
/// edited, so that it is not compared with its own stored copy.
pub fn check_conflicts(
    candidate: &Trip,
    existing: &[Trip],
    exclude: Option<TripId>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !candidate.is_in_progress() {
        return errors;
    }

    let mut active = existing
        .iter()
        .filter(|t| t.is_in_progress() && Some(t.id) != exclude);

    if active.clone().any(|t| t.driver_id == candidate.driver_id) {
        errors.push(FieldError::new(TripField::DriverId, DRIVER_BUSY));
    }

    if active.any(|t| t.truck_id == candidate.truck_id) {
        errors.push(FieldError::new(TripField::TruckId, TRUCK_BUSY));
    }

    errors
}
