//! # Assignment Options
//!
//! The drivers, trucks, cargos and routes a trip form may offer. This is where the
//! "one trip per cargo" rule is enforced: a cargo already used by a trip is only offered
//! back to that same trip.

use std::collections::HashSet;

use fleetsync_common::fleet::{
    CargoId, DriverId, DriverStatus, FleetSnapshot, RouteId, Trip, TruckId, TruckStatus,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssignmentOptions {
    pub drivers: Vec<DriverId>,
    pub trucks: Vec<TruckId>,
    pub cargos: Vec<CargoId>,
    pub routes: Vec<RouteId>,
}

/// Collects the choices for a new trip (`editing == None`) or for an edited one.
///
/// Drivers on vacation or sick leave and trucks in repair are left out, unless the
/// edited trip already uses them.
pub fn assignment_options(fleet: &FleetSnapshot, editing: Option<&Trip>) -> AssignmentOptions {
    let current_driver = editing.map(|t| t.driver_id);
    let current_truck = editing.map(|t| t.truck_id);
    let current_cargo = editing.map(|t| t.cargo_id);

    let drivers = fleet
        .drivers
        .iter()
        .filter(|d| {
            Some(d.id) == current_driver
                || matches!(d.status, DriverStatus::Free | DriverStatus::Trip)
        })
        .map(|d| d.id)
        .collect();

    let trucks = fleet
        .trucks
        .iter()
        .filter(|t| {
            Some(t.id) == current_truck || matches!(t.status, TruckStatus::Free | TruckStatus::InTrip)
        })
        .map(|t| t.id)
        .collect();

    let used: HashSet<CargoId> = fleet.trips.iter().map(|t| t.cargo_id).collect();
    let cargos = fleet
        .cargos
        .iter()
        .filter(|c| Some(c.id) == current_cargo || !used.contains(&c.id))
        .map(|c| c.id)
        .collect();

    let routes = fleet.routes.iter().map(|r| r.id).collect();

    AssignmentOptions {
        drivers,
        trucks,
        cargos,
        routes,
    }
}
