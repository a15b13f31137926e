//! # Fleet Model
//!
//! Entities of the freight domain. Every entity is a plain data struct; the rules that
//! keep their statuses consistent live in `fleetsync-core`.

pub mod cargo;
pub mod driver;
pub mod ids;
pub mod route;
pub mod snapshot;
pub mod status;
pub mod trip;
pub mod truck;

pub use cargo::Cargo;
pub use driver::Driver;
pub use ids::{CargoId, DriverId, EntityRef, RouteId, TripId, TruckId};
pub use route::Route;
pub use snapshot::FleetSnapshot;
pub use status::{CargoKind, CargoStatus, DriverStatus, TripStatus, TruckStatus};
pub use trip::Trip;
pub use truck::Truck;
