//! Date-consistency rules a trip must satisfy before it is accepted.

use fleetsync_common::error::{FieldError, TripField};
use fleetsync_common::fleet::Trip;

pub const ARRIVAL_WITHOUT_DEPARTURE: &str =
    "An actual arrival date cannot be set without an actual departure date";
pub const COMPLETED_NEEDS_DEPARTURE: &str =
    "A completed trip must have an actual departure date";
pub const ARRIVAL_BEFORE_DEPARTURE: &str =
    "The arrival date cannot be earlier than the departure date";
pub const ACTUAL_ARRIVAL_BEFORE_DEPARTURE: &str =
    "The actual arrival date cannot be earlier than the actual departure date";

/// Checks the planned and actual date pairs of `trip`.
pub fn validate_dates(trip: &Trip) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if trip.arrival_date < trip.departure_date {
        errors.push(FieldError::new(TripField::ArrivalDate, ARRIVAL_BEFORE_DEPARTURE));
    }

    match (trip.departure_date_actual, trip.arrival_date_actual) {
        (None, Some(_)) => {
            errors.push(FieldError::new(
                TripField::ArrivalDateActual,
                ARRIVAL_WITHOUT_DEPARTURE,
            ));
            errors.push(FieldError::new(
                TripField::DepartureDateActual,
                COMPLETED_NEEDS_DEPARTURE,
            ));
        }
        (Some(departed), Some(arrived)) if arrived < departed => {
            errors.push(FieldError::new(
                TripField::ArrivalDateActual,
                ACTUAL_ARRIVAL_BEFORE_DEPARTURE,
            ));
        }
        _ => {}
    }

    errors
}
