use fleetsync_common::fleet::{
    CargoId, CargoStatus, DriverId, DriverStatus, FleetSnapshot, TripStatus, TruckId, TruckStatus,
};
use fleetsync_core::{booking, synchronizer};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::util::{day, fleet, trip};

fn statuses(fleet: &FleetSnapshot) -> (Vec<DriverStatus>, Vec<TruckStatus>, Vec<CargoStatus>) {
    (
        fleet.drivers.iter().map(|d| d.status).collect(),
        fleet.trucks.iter().map(|t| t.status).collect(),
        fleet.cargos.iter().map(|c| c.status).collect(),
    )
}

fn busy_fleet() -> FleetSnapshot {
    let mut fleet = fleet(6);
    fleet.trips = vec![
        trip(1, 1, 1, 1, Some(day(1)), Some(day(4))),
        trip(2, 1, 2, 2, Some(day(5)), None),
        trip(3, 2, 2, 3, None, None),
        trip(4, 3, 3, 4, Some(day(2)), Some(day(3))),
        trip(5, 4, 4, 5, Some(day(2)), None),
        trip(6, 5, 3, 6, None, None),
    ];
    fleet.drivers[5].status = DriverStatus::Sick;
    fleet.trucks[5].status = TruckStatus::InRepair;
    fleet
}

#[test]
fn completed_and_in_progress_cargos() {
    let mut fleet = fleet(3);
    fleet.trips = vec![
        trip(1, 1, 1, 1, Some(day(1)), Some(day(2))),
        trip(2, 2, 2, 2, Some(day(1)), None),
    ];
    fleet.cargos[2].status = CargoStatus::InTransit;

    booking::refresh_statuses(&mut fleet);

    assert_eq!(fleet.cargo(CargoId(1)).unwrap().status, CargoStatus::Delivered);
    assert_eq!(fleet.cargo(CargoId(2)).unwrap().status, CargoStatus::InTransit);
    assert_eq!(fleet.cargo(CargoId(3)).unwrap().status, CargoStatus::NotDelivered);
}

#[test]
fn resync_resets_manual_statuses() {
    let mut fleet = busy_fleet();

    booking::refresh_statuses(&mut fleet);

    assert_eq!(fleet.driver(DriverId(6)).unwrap().status, DriverStatus::Free);
    assert_eq!(fleet.truck(TruckId(6)).unwrap().status, TruckStatus::Free);
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Trip);
    assert_eq!(fleet.truck(TruckId(2)).unwrap().status, TruckStatus::InTrip);
    assert_eq!(fleet.driver(DriverId(3)).unwrap().status, DriverStatus::Free);
}

#[test]
fn resync_is_idempotent() {
    let mut fleet = busy_fleet();

    let first = booking::refresh_statuses(&mut fleet);
    let after_first = statuses(&fleet);
    let second = booking::refresh_statuses(&mut fleet);

    assert_eq!(statuses(&fleet), after_first);
    assert!(first.changed > 0);
    assert_eq!(second.changed, 0);
}

#[test]
fn resync_ignores_trip_order() {
    let mut expected = busy_fleet();
    booking::refresh_statuses(&mut expected);
    let expected = statuses(&expected);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..32 {
        let mut fleet = busy_fleet();
        fleet.trips.shuffle(&mut rng);
        booking::refresh_statuses(&mut fleet);
        assert_eq!(statuses(&fleet), expected);
    }
}

#[test]
fn stale_trip_statuses_are_rederived_before_resync() {
    let mut fleet = fleet(1);
    let mut stored: FleetSnapshot = serde_json::from_value(serde_json::json!({
        "trips": [{
            "id": 1, "driver_id": 1, "truck_id": 1, "cargo_id": 1, "route_id": 1,
            "departure_date": "2024-01-01", "arrival_date": "2024-01-05",
            "departure_date_actual": "2024-01-01",
            "status": "planned"
        }]
    }))
    .unwrap();
    fleet.trips = std::mem::take(&mut stored.trips);
    assert!(fleet.trips[0].is_stale());

    booking::refresh_statuses(&mut fleet);

    assert_eq!(fleet.trips[0].status(), TripStatus::InProgress);
    assert_eq!(fleet.drivers[0].status, DriverStatus::Trip);
}

#[test]
fn cascade_differs_from_resync_for_released_entities() {
    let mut fleet = fleet(2);
    fleet.trips = vec![trip(1, 1, 1, 1, Some(day(1)), None)];
    booking::refresh_statuses(&mut fleet);

    // Re-pointing the trip onto driver 2 through the cascade leaves driver 1 as it was.
    let moved = trip(1, 2, 1, 1, Some(day(1)), None);
    synchronizer::cascade(&moved, &mut fleet);
    fleet.upsert_trip(moved);
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Trip);

    booking::refresh_statuses(&mut fleet);
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Free);
    assert_eq!(fleet.driver(DriverId(2)).unwrap().status, DriverStatus::Trip);
}
