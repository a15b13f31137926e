//! # Fleet Status Synchronizer
//!
//! Keeps driver, truck and cargo statuses in line with the trips that reference them.
//!
//! Two separate paths exist and they are not interchangeable:
//! * [`cascade`] / [`apply_trip_effects`] copy the status of **one** trip onto its
//!   three entities. Used when a single trip is created or edited.
//! * [`resynchronize_fleet`] recomputes every status from the full trip set. Applying
//!   the cascade trip by trip instead would let whichever trip came last win.

use fleetsync_common::fleet::{
    Cargo, CargoStatus, Driver, DriverStatus, FleetSnapshot, Trip, TripStatus, Truck,
    TruckStatus,
};
use fleetsync_common::{info, warn};
use tracing::debug;

/// Entity statuses dictated by a single trip.
fn effects_of(status: TripStatus) -> (DriverStatus, TruckStatus, CargoStatus) {
    match status {
        TripStatus::Planned => (DriverStatus::Free, TruckStatus::Free, CargoStatus::NotDelivered),
        TripStatus::InProgress => (DriverStatus::Trip, TruckStatus::InTrip, CargoStatus::InTransit),
        TripStatus::Completed => (DriverStatus::Free, TruckStatus::Free, CargoStatus::Delivered),
    }
}

/// Sets the driver, truck and cargo statuses dictated by `trip`.
///
/// The trip must already be resolved. If any of the three entities is missing the
/// call changes nothing and returns `false`.
pub fn apply_trip_effects(
    trip: &Trip,
    driver: Option<&mut Driver>,
    truck: Option<&mut Truck>,
    cargo: Option<&mut Cargo>,
) -> bool {
    let (Some(driver), Some(truck), Some(cargo)) = (driver, truck, cargo) else {
        return false;
    };

    let (driver_status, truck_status, cargo_status) = effects_of(trip.status());
    driver.status = driver_status;
    truck.status = truck_status;
    cargo.status = cargo_status;

    debug!(
        trip = %trip.id,
        status = ?trip.status(),
        driver = %driver.id,
        truck = %truck.id,
        cargo = %cargo.id,
        "cascaded trip status"
    );
    true
}

/// Looks up the trip's driver, truck and cargo in `fleet` and applies [`apply_trip_effects`].
///
/// A missing reference is logged and otherwise ignored; the CRUD layer is expected to
/// have checked that the ids exist.
pub fn cascade(trip: &Trip, fleet: &mut FleetSnapshot) -> bool {
    let (driver, truck, cargo) = fleet.assignment_mut(trip);

    if driver.is_none() || truck.is_none() || cargo.is_none() {
        warn!(
            "Trip {} references a missing entity (driver found: {}, truck found: {}, cargo found: {}); statuses left unchanged",
            trip.id,
            driver.is_some(),
            truck.is_some(),
            cargo.is_some()
        );
        return false;
    }

    apply_trip_effects(trip, driver, truck, cargo)
}

/// Outcome of a bulk resynchronization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub drivers_on_trip: usize,
    pub trucks_in_trip: usize,
    pub cargos_in_transit: usize,
    pub cargos_delivered: usize,
    /// Drivers, trucks and cargos whose status differs from before the run.
    pub changed: usize,
}

/// Recomputes every driver, truck and cargo status from the trip set.
///
/// Runs in two phases: everything is reset to its idle status, then each entity is
/// promoted if any trip referencing it says so. The result depends only on the trip
/// statuses, never on the order of `trips`.
pub fn resynchronize_fleet(
    trips: &[Trip],
    drivers: &mut [Driver],
    trucks: &mut [Truck],
    cargos: &mut [Cargo],
) -> SyncReport {
    let before_drivers: Vec<DriverStatus> = drivers.iter().map(|d| d.status).collect();
    let before_trucks: Vec<TruckStatus> = trucks.iter().map(|t| t.status).collect();
    let before_cargos: Vec<CargoStatus> = cargos.iter().map(|c| c.status).collect();

    reset_all(drivers, trucks, cargos);
    let report = apply_trips(trips, drivers, trucks, cargos);

    let changed = count_changed(&before_drivers, drivers.iter().map(|d| d.status))
        + count_changed(&before_trucks, trucks.iter().map(|t| t.status))
        + count_changed(&before_cargos, cargos.iter().map(|c| c.status));

    let report = SyncReport { changed, ..report };
    info!(
        "Resynchronized {} drivers, {} trucks, {} cargos ({} changed)",
        drivers.len(),
        trucks.len(),
        cargos.len(),
        report.changed
    );
    report
}

fn reset_all(drivers: &mut [Driver], trucks: &mut [Truck], cargos: &mut [Cargo]) {
    for driver in drivers.iter_mut() {
        driver.status = DriverStatus::Free;
    }
    for truck in trucks.iter_mut() {
        truck.status = TruckStatus::Free;
    }
    for cargo in cargos.iter_mut() {
        cargo.status = CargoStatus::NotDelivered;
    }
}

fn apply_trips(
    trips: &[Trip],
    drivers: &mut [Driver],
    trucks: &mut [Truck],
    cargos: &mut [Cargo],
) -> SyncReport {
    let mut report = SyncReport::default();

    for driver in drivers.iter_mut() {
        if trips.iter().any(|t| t.driver_id == driver.id && t.is_in_progress()) {
            driver.status = DriverStatus::Trip;
            report.drivers_on_trip += 1;
        }
    }

    for truck in trucks.iter_mut() {
        if trips.iter().any(|t| t.truck_id == truck.id && t.is_in_progress()) {
            truck.status = TruckStatus::InTrip;
            report.trucks_in_trip += 1;
        }
    }

    for cargo in cargos.iter_mut() {
        let cargo_id = cargo.id;
        let mut referencing = trips.iter().filter(|t| t.cargo_id == cargo_id);
        if referencing.clone().any(Trip::is_in_progress) {
            cargo.status = CargoStatus::InTransit;
            report.cargos_in_transit += 1;
        } else if referencing.any(|t| t.status() == TripStatus::Completed) {
            cargo.status = CargoStatus::Delivered;
            report.cargos_delivered += 1;
        }
    }

    report
}

fn count_changed<T: PartialEq>(before: &[T], after: impl Iterator<Item = T>) -> usize {
    before.iter().zip(after).filter(|(b, a)| *b != a).count()
}
