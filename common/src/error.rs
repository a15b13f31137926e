use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::fleet::{EntityRef, TripId};

/// Trip form fields that a validation message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripField {
    DriverId,
    TruckId,
    CargoId,
    RouteId,
    DepartureDate,
    ArrivalDate,
    DepartureDateActual,
    ArrivalDateActual,
}

impl TripField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripField::DriverId => "driver_id",
            TripField::TruckId => "truck_id",
            TripField::CargoId => "cargo_id",
            TripField::RouteId => "route_id",
            TripField::DepartureDate => "departure_date",
            TripField::ArrivalDate => "arrival_date",
            TripField::DepartureDateActual => "departure_date_actual",
            TripField::ArrivalDateActual => "arrival_date_actual",
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable message scoped to one field of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: TripField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: TripField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Reasons a trip submission is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The trip failed validation. Nothing was changed.
    #[error("trip rejected with {} validation error(s)", .0.len())]
    Rejected(Vec<FieldError>),
    #[error("trip id {body} does not match the edited trip {path}")]
    IdMismatch { path: TripId, body: TripId },
    #[error("trip {0} does not exist")]
    UnknownTrip(TripId),
    #[error("trip {0} already exists")]
    DuplicateTrip(TripId),
}

impl BookingError {
    /// Field-scoped messages carried by a rejection; empty for the other variants.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            BookingError::Rejected(errors) => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("cannot remove {entity}: it is used by {trips} trip(s)")]
    InUse { entity: EntityRef, trips: usize },
}
