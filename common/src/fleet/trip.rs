//! # Trip Model
//!
//! A trip binds one driver, one truck and one cargo to a route, with planned and
//! actual date ranges. Its [`TripStatus`] is never set directly: it is stored so that
//! downstream checks can trust it, and rewritten only by [`Trip::recalculate_status`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CargoId, DriverId, RouteId, TripId, TripStatus, TruckId};

/// Derives the lifecycle status of a trip from its actual dates.
///
/// Total over every combination of inputs:
/// * an actual arrival means the trip is [`TripStatus::Completed`];
/// * otherwise an actual departure means [`TripStatus::InProgress`];
/// * otherwise the trip is still [`TripStatus::Planned`].
pub fn derive_status(
    departure_actual: Option<NaiveDate>,
    arrival_actual: Option<NaiveDate>,
) -> TripStatus {
    if arrival_actual.is_some() {
        return TripStatus::Completed;
    }
    if departure_actual.is_some() {
        return TripStatus::InProgress;
    }
    TripStatus::Planned
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub driver_id: DriverId,
    pub truck_id: TruckId,
    pub cargo_id: CargoId,
    pub route_id: RouteId,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    #[serde(default)]
    pub departure_date_actual: Option<NaiveDate>,
    #[serde(default)]
    pub arrival_date_actual: Option<NaiveDate>,
    // Stored as loaded; may be stale until the next recalculation.
    #[serde(default)]
    status: TripStatus,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TripId,
        driver_id: DriverId,
        truck_id: TruckId,
        cargo_id: CargoId,
        route_id: RouteId,
        departure_date: NaiveDate,
        arrival_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            driver_id,
            truck_id,
            cargo_id,
            route_id,
            departure_date,
            arrival_date,
            departure_date_actual: None,
            arrival_date_actual: None,
            status: TripStatus::Planned,
        }
    }

    /// Sets both actual dates and recalculates the status.
    pub fn with_actual_dates(
        mut self,
        departure_actual: Option<NaiveDate>,
        arrival_actual: Option<NaiveDate>,
    ) -> Self {
        self.departure_date_actual = departure_actual;
        self.arrival_date_actual = arrival_actual;
        self.recalculate_status();
        self
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TripStatus::InProgress
    }

    /// Whether the stored status disagrees with the actual dates.
    pub fn is_stale(&self) -> bool {
        self.status != derive_status(self.departure_date_actual, self.arrival_date_actual)
    }

    /// Overwrites the stored status with the one derived from the actual dates.
    pub fn recalculate_status(&mut self) -> TripStatus {
        self.status = derive_status(self.departure_date_actual, self.arrival_date_actual);
        self.status
    }
}
