//! Trip Status Resolver.
//!
//! Must run before any conflict check or cascade: both trust the stored status.

use fleetsync_common::fleet::{Trip, TripStatus};
use tracing::debug;

pub use fleetsync_common::fleet::trip::derive_status;

/// Re-derives the status of a single trip and returns it.
pub fn resolve(trip: &mut Trip) -> TripStatus {
    let before = trip.status();
    let after = trip.recalculate_status();
    if before != after {
        debug!(trip = %trip.id, ?before, ?after, "trip status re-derived");
    }
    after
}

/// Re-derives every trip. Returns how many stored statuses were stale.
pub fn resolve_all(trips: &mut [Trip]) -> usize {
    trips
        .iter_mut()
        .map(|trip| {
            let before = trip.status();
            resolve(trip) != before
        })
        .filter(|changed| *changed)
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fleetsync_common::fleet::{CargoId, DriverId, RouteId, TripId, TruckId};

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn trip(id: u32) -> Trip {
        Trip::new(
            TripId(id),
            DriverId(id),
            TruckId(id),
            CargoId(id),
            RouteId(1),
            day(1),
            day(5),
        )
    }

    #[test]
    fn test_resolve_departed_trip() {
        let mut t = trip(1);
        t.departure_date_actual = Some(day(1));

        assert_eq!(resolve(&mut t), TripStatus::InProgress);
        assert_eq!(t.status(), TripStatus::InProgress);
    }

    #[test]
    fn test_resolve_all_counts_stale_trips() {
        let mut trips = vec![trip(1), trip(2), trip(3)];
        trips[0].departure_date_actual = Some(day(1));
        trips[2].departure_date_actual = Some(day(2));
        trips[2].arrival_date_actual = Some(day(4));

        assert_eq!(resolve_all(&mut trips), 2);
        assert_eq!(trips[0].status(), TripStatus::InProgress);
        assert_eq!(trips[1].status(), TripStatus::Planned);
        assert_eq!(trips[2].status(), TripStatus::Completed);

        // Nothing left to fix on a second pass.
        assert_eq!(resolve_all(&mut trips), 0);
    }

    #[test]
    fn test_clearing_actual_dates_returns_to_planned() {
        let mut t = trip(1).with_actual_dates(Some(day(1)), Some(day(3)));
        assert_eq!(t.status(), TripStatus::Completed);

        t.departure_date_actual = None;
        t.arrival_date_actual = None;
        assert_eq!(resolve(&mut t), TripStatus::Planned);
    }
}
