use std::path::Path;

use colored::*;

use crate::fprint;
use crate::snapshot;
use crate::terminal::{colors, format, print};
use fleetsync_common::config::Config;
use fleetsync_common::{info, success};
use fleetsync_core::booking;
use fleetsync_core::synchronizer::SyncReport;

pub fn resync(path: &Path, output: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let mut fleet = snapshot::load(path)?;
    info!(
        "Loaded {} trip(s), {} driver(s), {} truck(s), {} cargo(s)",
        fleet.trips.len(),
        fleet.drivers.len(),
        fleet.trucks.len(),
        fleet.cargos.len()
    );

    let report = booking::refresh_statuses(&mut fleet);
    print_report(&report, cfg);

    let target = output.unwrap_or(path);
    if cfg.dry_run {
        info!("Dry run, {} left untouched", target.display());
        return Ok(());
    }

    snapshot::save(target, &fleet)?;
    success!("Fleet written to {}", target.display());
    Ok(())
}

fn print_report(report: &SyncReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::tree_head("=", "Resynchronized");
    print::as_tree_one_level(vec![
        (String::from("Drivers on a trip"), format::count(report.drivers_on_trip)),
        (String::from("Trucks on a trip"), format::count(report.trucks_in_trip)),
        (String::from("Cargos in transit"), format::count(report.cargos_in_transit)),
        (String::from("Cargos delivered"), format::count(report.cargos_delivered)),
    ]);
    fprint!();

    let changed: ColoredString = format!("{} status(es) changed", report.changed)
        .bold()
        .color(colors::ACCENT);
    print::fat_separator();
    print::centerln(&changed.to_string());
}
