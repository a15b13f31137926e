use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts both `7` and `#7`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().trim_start_matches('#').parse::<u32>().map(Self)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`Driver`](super::Driver).
    DriverId
);
entity_id!(
    /// Identity of a [`Truck`](super::Truck).
    TruckId
);
entity_id!(
    /// Identity of a [`Cargo`](super::Cargo).
    CargoId
);
entity_id!(
    /// Identity of a [`Route`](super::Route).
    RouteId
);
entity_id!(
    /// Identity of a [`Trip`](super::Trip).
    TripId
);

/// A reference to any entity a trip can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Driver(DriverId),
    Truck(TruckId),
    Cargo(CargoId),
    Route(RouteId),
}

impl EntityRef {
    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::Driver(_) => "driver",
            EntityRef::Truck(_) => "truck",
            EntityRef::Cargo(_) => "cargo",
            EntityRef::Route(_) => "route",
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Driver(id) => write!(f, "driver {id}"),
            EntityRef::Truck(id) => write!(f, "truck {id}"),
            EntityRef::Cargo(id) => write!(f, "cargo {id}"),
            EntityRef::Route(id) => write!(f, "route {id}"),
        }
    }
}
