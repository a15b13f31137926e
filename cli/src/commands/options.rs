use std::path::Path;

use colored::*;

use crate::fprint;
use crate::snapshot;
use crate::terminal::{format, print};
use fleetsync_common::config::Config;
use fleetsync_common::fleet::{FleetSnapshot, TripId};
use fleetsync_core::options::{AssignmentOptions, assignment_options};

type Detail = (String, ColoredString);

pub fn options(path: &Path, trip: Option<TripId>, cfg: &Config) -> anyhow::Result<()> {
    let fleet = snapshot::load(path)?;

    let editing = match trip {
        Some(id) => match fleet.trip(id) {
            Some(trip) => Some(trip),
            None => anyhow::bail!("trip {} does not exist in {}", id, path.display()),
        },
        None => None,
    };

    let choices = assignment_options(&fleet, editing);
    print_options(&fleet, &choices, cfg);
    Ok(())
}

fn print_options(fleet: &FleetSnapshot, choices: &AssignmentOptions, cfg: &Config) {
    let groups: [(&str, Vec<Detail>); 4] = [
        (
            "Drivers",
            choices
                .drivers
                .iter()
                .filter_map(|id| fleet.driver(*id))
                .map(|d| (d.id.to_string(), detail(cfg, d.full_name(), format::driver_status(d.status))))
                .collect(),
        ),
        (
            "Trucks",
            choices
                .trucks
                .iter()
                .filter_map(|id| fleet.truck(*id))
                .map(|t| (t.id.to_string(), detail(cfg, t.plate_number.clone(), format::truck_status(t.status))))
                .collect(),
        ),
        (
            "Cargos",
            choices
                .cargos
                .iter()
                .filter_map(|id| fleet.cargo(*id))
                .map(|c| (c.id.to_string(), detail(cfg, c.description.clone(), format::cargo_status(c.status))))
                .collect(),
        ),
        (
            "Routes",
            choices
                .routes
                .iter()
                .filter_map(|id| fleet.route(*id))
                .map(|r| (r.id.to_string(), r.full_route().normal()))
                .collect(),
        ),
    ];

    let len = groups.len();
    for (idx, (name, details)) in groups.into_iter().enumerate() {
        print::tree_head(details.len(), name);
        if details.is_empty() {
            print::no_results(&name.to_lowercase());
        } else {
            print::as_tree_one_level(details);
        }
        if idx + 1 != len {
            fprint!();
        }
    }
}

fn detail(cfg: &Config, label: String, status: ColoredString) -> ColoredString {
    match cfg.quiet {
        0 => format!("{label} ({status})").normal(),
        _ => label.normal(),
    }
}
