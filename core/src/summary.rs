use fleetsync_common::fleet::{CargoStatus, DriverStatus, FleetSnapshot, TruckStatus};

/// Dashboard counters over a fleet snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FleetSummary {
    pub drivers: usize,
    pub trucks: usize,
    pub cargos: usize,
    pub routes: usize,
    pub trips: usize,
    pub active_trips: usize,
    pub free_drivers: usize,
    pub busy_trucks: usize,
    pub cargos_in_transit: usize,
}

impl FleetSummary {
    pub fn collect(fleet: &FleetSnapshot) -> Self {
        Self {
            drivers: fleet.drivers.len(),
            trucks: fleet.trucks.len(),
            cargos: fleet.cargos.len(),
            routes: fleet.routes.len(),
            trips: fleet.trips.len(),
            active_trips: fleet.trips.iter().filter(|t| t.is_in_progress()).count(),
            free_drivers: fleet
                .drivers
                .iter()
                .filter(|d| d.status == DriverStatus::Free)
                .count(),
            busy_trucks: fleet
                .trucks
                .iter()
                .filter(|t| t.status == TruckStatus::InTrip)
                .count(),
            cargos_in_transit: fleet
                .cargos
                .iter()
                .filter(|c| c.status == CargoStatus::InTransit)
                .count(),
        }
    }
}
