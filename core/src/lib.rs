//! # fleetsync-core
//!
//! The status-consistency engine. Every operation works on collections handed in by
//! the caller; nothing here owns storage, spawns work, or blocks.
//!
//! * **[`resolver`]**: derives a trip's status from its actual dates.
//! * **[`synchronizer`]**: propagates trip statuses onto drivers, trucks and cargos,
//!   either for one trip ([`synchronizer::cascade`]) or for the whole fleet
//!   ([`synchronizer::resynchronize_fleet`]).
//! * **[`conflicts`]**: rejects an in-progress trip whose driver or truck is already
//!   on another in-progress trip.
//! * **[`validation`]**: date-consistency checks for a submitted trip.
//! * **[`booking`]**: the create/edit path that strings the above together.
//! * **[`options`]**, **[`references`]**, **[`summary`]**: read-only helpers for the
//!   CRUD layer (form choices, delete guards, dashboard counters).

pub mod booking;
pub mod conflicts;
pub mod options;
pub mod references;
pub mod resolver;
pub mod summary;
pub mod synchronizer;
pub mod validation;
