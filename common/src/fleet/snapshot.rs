//! # Fleet Snapshot
//!
//! One consistent, in-memory copy of every collection the engine works on. Callers
//! load it from their own storage, hand it to the engine, and persist whatever the
//! engine changed.

use serde::{Deserialize, Serialize};

use super::{
    Cargo, CargoId, Driver, DriverId, Route, RouteId, Trip, TripId, Truck, TruckId,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub trucks: Vec<Truck>,
    #[serde(default)]
    pub cargos: Vec<Cargo>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl FleetSnapshot {
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    pub fn cargo(&self, id: CargoId) -> Option<&Cargo> {
        self.cargos.iter().find(|c| c.id == id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Mutable handles to the driver, truck and cargo a trip references.
    ///
    /// Each slot is `None` when the snapshot has no entity with that id.
    pub fn assignment_mut(
        &mut self,
        trip: &Trip,
    ) -> (Option<&mut Driver>, Option<&mut Truck>, Option<&mut Cargo>) {
        let driver = self.drivers.iter_mut().find(|d| d.id == trip.driver_id);
        let truck = self.trucks.iter_mut().find(|t| t.id == trip.truck_id);
        let cargo = self.cargos.iter_mut().find(|c| c.id == trip.cargo_id);
        (driver, truck, cargo)
    }

    /// Inserts the trip, or replaces the trip with the same id.
    pub fn upsert_trip(&mut self, trip: Trip) {
        match self.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => *slot = trip,
            None => self.trips.push(trip),
        }
    }

    /// The next free trip id (one past the highest in use).
    pub fn next_trip_id(&self) -> TripId {
        let max = self.trips.iter().map(|t| t.id.0).max().unwrap_or(0);
        TripId(max + 1)
    }
}
