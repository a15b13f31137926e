//! Reading and writing fleet snapshots and trip forms as JSON files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use fleetsync_common::fleet::{CargoId, DriverId, FleetSnapshot, RouteId, Trip, TripId, TruckId};
use serde::Deserialize;

pub fn load(path: &Path) -> anyhow::Result<FleetSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

pub fn save(path: &Path, fleet: &FleetSnapshot) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(fleet).context("failed to encode snapshot")?;
    fs::write(path, raw).with_context(|| format!("failed to write snapshot {}", path.display()))
}

/// A trip as submitted by a person. The id is optional for new trips and the status
/// is never read from input.
#[derive(Debug, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub id: Option<TripId>,
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
}

impl TripForm {
    /// Builds the trip, using `fallback_id` when the form has no id of its own.
    pub fn into_trip(self, fallback_id: TripId) -> Trip {
        let mut trip = Trip::new(
            self.id.unwrap_or(fallback_id),
            self.driver_id,
            self.truck_id,
            self.cargo_id,
            self.route_id,
            self.departure_date,
            self.arrival_date,
        );
        trip.departure_date_actual = self.departure_date_actual;
        trip.arrival_date_actual = self.arrival_date_actual;
        trip
    }
}

pub fn load_trip_form(path: &Path) -> anyhow::Result<TripForm> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read trip {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse trip {}", path.display()))
}
