use fleetsync_common::fleet::{FleetSnapshot, TripStatus};
use fleetsync_core::booking;

use crate::util::{day, fleet, trip};

#[test]
fn snapshot_survives_json_after_resync() {
    let mut fleet = fleet(2);
    fleet.trips = vec![
        trip(1, 1, 1, 1, Some(day(1)), Some(day(3))),
        trip(2, 2, 2, 2, Some(day(2)), None),
    ];
    booking::refresh_statuses(&mut fleet);

    let raw = serde_json::to_string(&fleet).unwrap();
    let loaded: FleetSnapshot = serde_json::from_str(&raw).unwrap();

    assert_eq!(loaded, fleet);
    assert!(loaded.trips.iter().all(|t| !t.is_stale()));
    assert_eq!(loaded.trips[1].status(), TripStatus::InProgress);
}

#[test]
fn partial_snapshot_fills_missing_collections() {
    let loaded: FleetSnapshot = serde_json::from_str(r#"{ "routes": [] }"#).unwrap();
    assert_eq!(loaded, FleetSnapshot::default());
}
