use chrono::NaiveDate;
use fleetsync_common::fleet::{
    Cargo, CargoId, CargoKind, Driver, DriverId, FleetSnapshot, Route, RouteId, Trip, TripId,
    Truck, TruckId,
};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// A fleet with `n` drivers, trucks, cargos and routes, numbered from 1, and no trips.
pub fn fleet(n: u32) -> FleetSnapshot {
    FleetSnapshot {
        drivers: (1..=n)
            .map(|i| Driver::new(DriverId(i), "Ivanov", &format!("Driver{i}")))
            .collect(),
        trucks: (1..=n)
            .map(|i| Truck::new(TruckId(i), &format!("A{i:03}AA")))
            .collect(),
        cargos: (1..=n)
            .map(|i| Cargo::new(CargoId(i), &format!("Pallet {i}"), CargoKind::Solid))
            .collect(),
        routes: (1..=n)
            .map(|i| Route::new(RouteId(i), "Omsk", &format!("Town {i}")))
            .collect(),
        trips: Vec::new(),
    }
}

/// A trip on route 1 planned for Jan 1-5, with the given actual dates already resolved.
pub fn trip(
    id: u32,
    driver: u32,
    truck: u32,
    cargo: u32,
    departed: Option<NaiveDate>,
    arrived: Option<NaiveDate>,
) -> Trip {
    Trip::new(
        TripId(id),
        DriverId(driver),
        TruckId(truck),
        CargoId(cargo),
        RouteId(1),
        day(1),
        day(5),
    )
    .with_actual_dates(departed, arrived)
}
