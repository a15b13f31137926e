use crate::terminal::colors;
use colored::*;
use fleetsync_common::error::FieldError;
use fleetsync_common::fleet::{
    Cargo, CargoStatus, Driver, DriverStatus, Route, Trip, TripStatus, Truck, TruckStatus,
};
use fleetsync_common::labels::{
    CARGO_KINDS, CARGO_STATUSES, DRIVER_STATUSES, TRIP_STATUSES, TRUCK_STATUSES,
};

pub fn driver_status(status: DriverStatus) -> ColoredString {
    let color = match status {
        DriverStatus::Free => colors::IDLE,
        DriverStatus::Trip => colors::BUSY,
        DriverStatus::Vacation | DriverStatus::Sick => colors::UNAVAILABLE,
    };
    DRIVER_STATUSES.display(status).color(color)
}

pub fn truck_status(status: TruckStatus) -> ColoredString {
    let color = match status {
        TruckStatus::Free => colors::IDLE,
        TruckStatus::InTrip => colors::BUSY,
        TruckStatus::InRepair => colors::UNAVAILABLE,
    };
    TRUCK_STATUSES.display(status).color(color)
}

pub fn cargo_status(status: CargoStatus) -> ColoredString {
    let color = match status {
        CargoStatus::NotDelivered => colors::IDLE,
        CargoStatus::InTransit => colors::BUSY,
        CargoStatus::Delivered => colors::DONE,
    };
    CARGO_STATUSES.display(status).color(color)
}

pub fn trip_status(status: TripStatus) -> ColoredString {
    let color = match status {
        TripStatus::Planned => colors::IDLE,
        TripStatus::InProgress => colors::BUSY,
        TripStatus::Completed => colors::DONE,
    };
    TRIP_STATUSES.display(status).color(color)
}

pub fn count(n: usize) -> ColoredString {
    n.to_string().color(colors::ACCENT)
}

pub fn driver_to_key_value_pair(driver: &Driver) -> Vec<(String, ColoredString)> {
    vec![
        (String::from("Name"), driver.full_name().normal()),
        (String::from("Status"), driver_status(driver.status)),
    ]
}

pub fn truck_to_key_value_pair(truck: &Truck) -> Vec<(String, ColoredString)> {
    let mut pairs = vec![(String::from("Plate"), truck.plate_number.normal())];
    if !truck.brand.is_empty() {
        pairs.push((
            String::from("Model"),
            format!("{} {}", truck.brand, truck.model).trim().normal(),
        ));
    }
    pairs.push((String::from("Status"), truck_status(truck.status)));
    pairs
}

pub fn cargo_to_key_value_pair(cargo: &Cargo) -> Vec<(String, ColoredString)> {
    vec![
        (String::from("Description"), cargo.description.normal()),
        (String::from("Kind"), CARGO_KINDS.display(cargo.kind).normal()),
        (String::from("Status"), cargo_status(cargo.status)),
    ]
}

pub fn route_to_key_value_pair(route: &Route) -> Vec<(String, ColoredString)> {
    vec![(String::from("Route"), route.full_route().normal())]
}

pub fn trip_to_key_value_pair(trip: &Trip) -> Vec<(String, ColoredString)> {
    let dates = |planned: chrono::NaiveDate, actual: Option<chrono::NaiveDate>| {
        match actual {
            Some(actual) => format!("{planned} (actual {actual})").normal(),
            None => planned.to_string().normal(),
        }
    };

    vec![
        (String::from("Driver"), trip.driver_id.to_string().normal()),
        (String::from("Truck"), trip.truck_id.to_string().normal()),
        (String::from("Cargo"), trip.cargo_id.to_string().normal()),
        (String::from("Route"), trip.route_id.to_string().normal()),
        (
            String::from("Departure"),
            dates(trip.departure_date, trip.departure_date_actual),
        ),
        (
            String::from("Arrival"),
            dates(trip.arrival_date, trip.arrival_date_actual),
        ),
        (String::from("Status"), trip_status(trip.status())),
    ]
}

pub fn field_errors_to_key_value_pair(errors: &[FieldError]) -> Vec<(String, ColoredString)> {
    errors
        .iter()
        .map(|e| (e.field.to_string(), e.message.red()))
        .collect()
}
