//! Guards against removing an entity that trips still point at.

use fleetsync_common::error::ReferenceError;
use fleetsync_common::fleet::{EntityRef, Trip};

/// Whether `trip` points at `entity`.
pub fn references(trip: &Trip, entity: EntityRef) -> bool {
    match entity {
        EntityRef::Driver(id) => trip.driver_id == id,
        EntityRef::Truck(id) => trip.truck_id == id,
        EntityRef::Cargo(id) => trip.cargo_id == id,
        EntityRef::Route(id) => trip.route_id == id,
    }
}

/// Fails when any trip, in any status, references `entity`.
pub fn ensure_unreferenced(trips: &[Trip], entity: EntityRef) -> Result<(), ReferenceError> {
    let count = trips.iter().filter(|t| references(t, entity)).count();
    if count > 0 {
        return Err(ReferenceError::InUse {
            entity,
            trips: count,
        });
    }
    Ok(())
}
