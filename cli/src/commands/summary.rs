use std::path::Path;

use colored::*;

use crate::snapshot;
use crate::terminal::{format, print};
use fleetsync_common::config::Config;
use fleetsync_core::summary::FleetSummary;

const KEY_WIDTH: usize = 17;

pub fn summary(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let fleet = snapshot::load(path)?;
    let counters = FleetSummary::collect(&fleet);

    if cfg.quiet > 1 {
        print::print(&format!(
            "{} active trip(s), {} free driver(s)",
            counters.active_trips, counters.free_drivers
        ));
        return Ok(());
    }

    let lines: [(&str, ColoredString); 9] = [
        ("Drivers", format::count(counters.drivers)),
        ("Trucks", format::count(counters.trucks)),
        ("Cargos", format::count(counters.cargos)),
        ("Routes", format::count(counters.routes)),
        ("Trips", format::count(counters.trips)),
        ("Active trips", format::count(counters.active_trips)),
        ("Free drivers", format::count(counters.free_drivers)),
        ("Trucks on a trip", format::count(counters.busy_trucks)),
        ("Cargos in transit", format::count(counters.cargos_in_transit)),
    ];

    for (key, value) in lines {
        print::aligned_line(key, value, KEY_WIDTH);
    }

    let stale = fleet.trips.iter().filter(|t| t.is_stale()).count();
    if stale > 0 {
        fleetsync_common::warn!(
            "{} trip(s) carry a stale status, run 'resync' to fix the fleet",
            stale
        );
    }

    print::end_of_program();
    Ok(())
}
