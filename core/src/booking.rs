//! # Booking Service
//!
//! The single-trip create/edit path and the bulk "refresh statuses" trigger, both run
//! against a [`FleetSnapshot`] the caller loaded and will persist.

use fleetsync_common::error::BookingError;
use fleetsync_common::fleet::{FleetSnapshot, Trip, TripId, TripStatus};
use fleetsync_common::labels::TRIP_STATUSES;
use fleetsync_common::{success, warn};

use crate::conflicts::check_conflicts;
use crate::resolver;
use crate::synchronizer::{self, SyncReport};
use crate::validation::validate_dates;

/// How a trip reaches the booking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Create,
    /// Edit of the stored trip with this id.
    Edit(TripId),
}

/// Accepts a new or edited trip into `fleet`.
///
/// The steps run in a fixed order:
/// 1. **Identity**: a new trip must not reuse a stored id; an edited trip must carry
///    the edited id and already exist.
/// 2. **Resolve**: the trip status is re-derived from its actual dates.
/// 3. **Validate**: date rules and booking conflicts. Any error rejects the trip and
///    leaves `fleet` untouched.
/// 4. **Cascade**: the trip's status is copied onto its driver, truck and cargo, and the
///    trip is stored.
pub fn submit(
    fleet: &mut FleetSnapshot,
    mut trip: Trip,
    submission: Submission,
) -> Result<TripStatus, BookingError> {
    let exclude = match submission {
        Submission::Create => {
            if fleet.trip(trip.id).is_some() {
                return Err(BookingError::DuplicateTrip(trip.id));
            }
            None
        }
        Submission::Edit(path) => {
            if trip.id != path {
                return Err(BookingError::IdMismatch {
                    path,
                    body: trip.id,
                });
            }
            if fleet.trip(path).is_none() {
                return Err(BookingError::UnknownTrip(path));
            }
            Some(path)
        }
    };

    let status = resolver::resolve(&mut trip);

    let mut errors = validate_dates(&trip);
    errors.extend(check_conflicts(&trip, &fleet.trips, exclude));
    if !errors.is_empty() {
        warn!("Trip {} rejected: {} validation error(s)", trip.id, errors.len());
        return Err(BookingError::Rejected(errors));
    }

    synchronizer::cascade(&trip, fleet);

    success!("Trip {} accepted as {}", trip.id, TRIP_STATUSES.display(status));
    fleet.upsert_trip(trip);
    Ok(status)
}

/// Re-derives every trip status, then recomputes the whole fleet from scratch.
pub fn refresh_statuses(fleet: &mut FleetSnapshot) -> SyncReport {
    let stale = resolver::resolve_all(&mut fleet.trips);
    if stale > 0 {
        warn!("{} trip(s) had a stale status", stale);
    }

    let FleetSnapshot {
        drivers,
        trucks,
        cargos,
        trips,
        ..
    } = fleet;

    synchronizer::resynchronize_fleet(trips, drivers, trucks, cargos)
}
