use fleetsync_common::error::{BookingError, TripField};
use fleetsync_common::fleet::{
    CargoId, CargoStatus, DriverId, DriverStatus, EntityRef, TripId, TripStatus, TruckId,
    TruckStatus,
};
use fleetsync_core::booking::{self, Submission};
use fleetsync_core::options::assignment_options;
use fleetsync_core::references::ensure_unreferenced;
use fleetsync_core::summary::FleetSummary;

use crate::util::{day, fleet, trip};

#[test]
fn departed_trip_cascades_to_its_assignment() {
    let mut fleet = fleet(2);

    let status = booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();

    assert_eq!(status, TripStatus::InProgress);
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Trip);
    assert_eq!(fleet.truck(TruckId(1)).unwrap().status, TruckStatus::InTrip);
    assert_eq!(fleet.cargo(CargoId(1)).unwrap().status, CargoStatus::InTransit);
    assert_eq!(fleet.trips.len(), 1);
}

#[test]
fn busy_driver_rejects_second_trip_and_keeps_fleet() {
    let mut fleet = fleet(2);
    booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();
    let before = fleet.clone();

    let err = booking::submit(
        &mut fleet,
        trip(2, 1, 2, 2, Some(day(2)), None),
        Submission::Create,
    )
    .unwrap_err();

    let errors = err.field_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, TripField::DriverId);
    assert_eq!(fleet, before);
}

#[test]
fn planned_trip_never_conflicts() {
    let mut fleet = fleet(2);
    booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();

    let status =
        booking::submit(&mut fleet, trip(2, 1, 1, 2, None, None), Submission::Create).unwrap();

    assert_eq!(status, TripStatus::Planned);
    // The cascade copies the planned status onto the shared driver.
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Free);
}

#[test]
fn editing_in_progress_trip_does_not_conflict_with_itself() {
    let mut fleet = fleet(1);
    booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();

    let status = booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), Some(day(4))),
        Submission::Edit(TripId(1)),
    )
    .unwrap();

    assert_eq!(status, TripStatus::Completed);
    assert_eq!(fleet.trips.len(), 1);
    assert_eq!(fleet.cargo(CargoId(1)).unwrap().status, CargoStatus::Delivered);
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Free);
}

#[test]
fn edit_identity_is_checked_first() {
    let mut fleet = fleet(1);

    let mismatch = booking::submit(
        &mut fleet,
        trip(2, 1, 1, 1, None, None),
        Submission::Edit(TripId(1)),
    );
    assert!(matches!(mismatch, Err(BookingError::IdMismatch { .. })));

    let unknown = booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, None, None),
        Submission::Edit(TripId(1)),
    );
    assert_eq!(unknown, Err(BookingError::UnknownTrip(TripId(1))));
}

#[test]
fn arrival_without_departure_is_rejected() {
    let mut fleet = fleet(1);

    let err = booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, None, Some(day(3))),
        Submission::Create,
    )
    .unwrap_err();

    let fields: Vec<TripField> = err.field_errors().iter().map(|e| e.field).collect();
    assert!(fields.contains(&TripField::DepartureDateActual));
    assert!(fields.contains(&TripField::ArrivalDateActual));
    assert!(fleet.trips.is_empty());
}

#[test]
fn used_cargo_is_offered_only_to_its_trip() {
    let mut fleet = fleet(2);
    booking::submit(&mut fleet, trip(1, 1, 1, 1, None, None), Submission::Create).unwrap();

    let fresh = assignment_options(&fleet, None);
    assert_eq!(fresh.cargos, vec![CargoId(2)]);

    let editing = fleet.trip(TripId(1)).cloned().unwrap();
    let edit = assignment_options(&fleet, Some(&editing));
    assert_eq!(edit.cargos, vec![CargoId(1), CargoId(2)]);
}

#[test]
fn referenced_driver_cannot_be_removed() {
    let mut fleet = fleet(2);
    booking::submit(&mut fleet, trip(1, 1, 1, 1, None, None), Submission::Create).unwrap();

    assert!(ensure_unreferenced(&fleet.trips, EntityRef::Driver(DriverId(1))).is_err());
    assert!(ensure_unreferenced(&fleet.trips, EntityRef::Driver(DriverId(2))).is_ok());
}

#[test]
fn summary_follows_bookings() {
    let mut fleet = fleet(3);
    booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();
    booking::submit(&mut fleet, trip(2, 2, 2, 2, None, None), Submission::Create).unwrap();

    let summary = FleetSummary::collect(&fleet);
    assert_eq!(summary.trips, 2);
    assert_eq!(summary.active_trips, 1);
    assert_eq!(summary.free_drivers, 2);
    assert_eq!(summary.busy_trucks, 1);
    assert_eq!(summary.cargos_in_transit, 1);
}

#[test]
fn creating_over_a_stored_trip_is_refused() {
    let mut fleet = fleet(2);
    booking::submit(
        &mut fleet,
        trip(1, 1, 1, 1, Some(day(1)), None),
        Submission::Create,
    )
    .unwrap();

    let err = booking::submit(&mut fleet, trip(1, 2, 2, 2, None, None), Submission::Create)
        .unwrap_err();

    assert_eq!(err, BookingError::DuplicateTrip(TripId(1)));
    assert_eq!(fleet.trips.len(), 1);
    assert_eq!(fleet.trip(TripId(1)).unwrap().driver_id, DriverId(1));
    assert_eq!(fleet.driver(DriverId(1)).unwrap().status, DriverStatus::Trip);
    assert_eq!(fleet.driver(DriverId(2)).unwrap().status, DriverStatus::Free);
}
