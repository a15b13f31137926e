//! # Status Labels
//!
//! Lookup tables mapping each status value to a display label and to the name it is
//! stored under in the fleet database. The status enums know nothing about either.

use crate::fleet::{CargoKind, CargoStatus, DriverStatus, TripStatus, TruckStatus};

#[derive(Debug, Clone, Copy)]
pub struct LabelRow<T: 'static> {
    pub value: T,
    pub display: &'static str,
    pub storage: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LabelTable<T: 'static> {
    rows: &'static [LabelRow<T>],
}

impl<T: Copy + PartialEq> LabelTable<T> {
    pub const fn new(rows: &'static [LabelRow<T>]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [LabelRow<T>] {
        self.rows
    }

    fn row(&self, value: T) -> Option<&'static LabelRow<T>> {
        self.rows.iter().find(|row| row.value == value)
    }

    pub fn display(&self, value: T) -> &'static str {
        self.row(value).map_or("unknown", |row| row.display)
    }

    pub fn storage_name(&self, value: T) -> &'static str {
        self.row(value).map_or("unknown", |row| row.storage)
    }

    pub fn from_storage_name(&self, name: &str) -> Option<T> {
        self.rows
            .iter()
            .find(|row| row.storage == name)
            .map(|row| row.value)
    }

    /// Every value except the excluded ones, in table order.
    ///
    /// Used to offer the statuses a person may pick by hand, leaving out the ones
    /// only the synchronizer assigns.
    pub fn except(&self, excluded: &[T]) -> Vec<T> {
        self.rows
            .iter()
            .map(|row| row.value)
            .filter(|value| !excluded.contains(value))
            .collect()
    }
}

pub const DRIVER_STATUSES: LabelTable<DriverStatus> = LabelTable::new(&[
    LabelRow { value: DriverStatus::Free, display: "Free", storage: "Свободен" },
    LabelRow { value: DriverStatus::Vacation, display: "On vacation", storage: "В отпуске" },
    LabelRow { value: DriverStatus::Trip, display: "On a trip", storage: "В рейсе" },
    LabelRow { value: DriverStatus::Sick, display: "On sick leave", storage: "На больничном" },
]);

pub const TRUCK_STATUSES: LabelTable<TruckStatus> = LabelTable::new(&[
    LabelRow { value: TruckStatus::InTrip, display: "On a trip", storage: "В рейсе" },
    LabelRow { value: TruckStatus::InRepair, display: "In repair", storage: "На ремонте" },
    LabelRow { value: TruckStatus::Free, display: "Free", storage: "Свободен" },
]);

pub const CARGO_STATUSES: LabelTable<CargoStatus> = LabelTable::new(&[
    LabelRow { value: CargoStatus::Delivered, display: "Delivered", storage: "Доставлен" },
    LabelRow { value: CargoStatus::NotDelivered, display: "Not delivered", storage: "Не доставлен" },
    LabelRow { value: CargoStatus::InTransit, display: "In transit", storage: "В пути" },
]);

pub const TRIP_STATUSES: LabelTable<TripStatus> = LabelTable::new(&[
    LabelRow { value: TripStatus::Planned, display: "Planned", storage: "Запланирован" },
    LabelRow { value: TripStatus::InProgress, display: "In progress", storage: "Выполняется" },
    LabelRow { value: TripStatus::Completed, display: "Completed", storage: "Завершен" },
]);

pub const CARGO_KINDS: LabelTable<CargoKind> = LabelTable::new(&[
    LabelRow { value: CargoKind::Fragile, display: "Fragile", storage: "Хрупкий" },
    LabelRow { value: CargoKind::Solid, display: "Solid", storage: "Твердый" },
    LabelRow { value: CargoKind::Dangerous, display: "Dangerous", storage: "Опасный" },
    LabelRow { value: CargoKind::Perishable, display: "Perishable", storage: "Скоропортящиеся" },
]);
