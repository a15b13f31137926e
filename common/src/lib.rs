//! # fleetsync-common
//!
//! Shared building blocks for the `fleetsync` workspace.
//!
//! * **[`fleet`]**: the freight domain model (drivers, trucks, cargos, routes, trips)
//!   and the [`fleet::snapshot::FleetSnapshot`] that carries them between layers.
//! * **[`labels`]**: display and storage names for every status value.
//! * **[`error`]**: error types shared by the engine and its callers.
//! * **[`config`]**: runtime options collected by the CLI.
//! * **[`log`]**: the logging macros used across crates.

pub mod config;
pub mod error;
pub mod fleet;
pub mod labels;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
