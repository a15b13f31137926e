use serde::{Deserialize, Serialize};

use super::{CargoId, CargoKind, CargoStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub id: CargoId,
    pub description: String,
    pub weight_tons: f64,
    pub sender: String,
    pub receiver: String,
    pub kind: CargoKind,
    #[serde(default)]
    pub status: CargoStatus,
}

impl Cargo {
    pub fn new(id: CargoId, description: &str, kind: CargoKind) -> Self {
        Self {
            id,
            description: description.to_string(),
            weight_tons: 0.0,
            sender: String::new(),
            receiver: String::new(),
            kind,
            status: CargoStatus::default(),
        }
    }
}
