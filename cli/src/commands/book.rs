use std::path::Path;

use crate::fprint;
use crate::snapshot;
use crate::terminal::{format, print};
use fleetsync_common::config::Config;
use fleetsync_common::error::BookingError;
use fleetsync_common::fleet::{FleetSnapshot, Trip, TripId};
use fleetsync_common::{error, info, success};
use fleetsync_core::booking::{self, Submission};

pub fn book(path: &Path, trip: &Path, edit: Option<TripId>, cfg: &Config) -> anyhow::Result<()> {
    let mut fleet = snapshot::load(path)?;
    let form = snapshot::load_trip_form(trip)?;

    let submission = match edit {
        Some(id) => Submission::Edit(id),
        None => Submission::Create,
    };
    let fallback_id = edit.unwrap_or_else(|| fleet.next_trip_id());
    let trip = form.into_trip(fallback_id);
    let trip_id = trip.id;

    if let Err(err) = booking::submit(&mut fleet, trip, submission) {
        report_rejection(&err);
        return Err(err.into());
    }

    print_assignment(&fleet, trip_id, cfg);

    if cfg.dry_run {
        info!("Dry run, {} left untouched", path.display());
        return Ok(());
    }

    snapshot::save(path, &fleet)?;
    success!("Fleet written to {}", path.display());
    Ok(())
}

fn report_rejection(err: &BookingError) {
    let errors = err.field_errors();
    if errors.is_empty() {
        return;
    }
    error!("Trip rejected");
    print::as_tree_one_level(format::field_errors_to_key_value_pair(errors));
}

fn print_assignment(fleet: &FleetSnapshot, trip_id: TripId, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    let Some(trip) = fleet.trip(trip_id) else {
        return;
    };

    print::tree_head(trip.id, "Trip");
    print::as_tree_one_level(format::trip_to_key_value_pair(trip));

    if cfg.quiet > 0 {
        return;
    }
    print_parties(fleet, trip);
}

fn print_parties(fleet: &FleetSnapshot, trip: &Trip) {
    if let Some(driver) = fleet.driver(trip.driver_id) {
        fprint!();
        print::tree_head(driver.id, "Driver");
        print::as_tree_one_level(format::driver_to_key_value_pair(driver));
    }
    if let Some(truck) = fleet.truck(trip.truck_id) {
        fprint!();
        print::tree_head(truck.id, "Truck");
        print::as_tree_one_level(format::truck_to_key_value_pair(truck));
    }
    if let Some(cargo) = fleet.cargo(trip.cargo_id) {
        fprint!();
        print::tree_head(cargo.id, "Cargo");
        print::as_tree_one_level(format::cargo_to_key_value_pair(cargo));
    }
    if let Some(route) = fleet.route(trip.route_id) {
        fprint!();
        print::tree_head(route.id, "Route");
        print::as_tree_one_level(format::route_to_key_value_pair(route));
    }
}
