use serde::{Deserialize, Serialize};

use super::RouteId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(id: RouteId, origin: &str, destination: &str) -> Self {
        Self {
            id,
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    pub fn full_route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
