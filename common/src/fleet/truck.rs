use serde::{Deserialize, Serialize};

use super::{TruckId, TruckStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub capacity_tons: f64,
    pub plate_number: String,
    #[serde(default)]
    pub status: TruckStatus,
}

impl Truck {
    pub fn new(id: TruckId, plate_number: &str) -> Self {
        Self {
            id,
            brand: String::new(),
            model: String::new(),
            year: None,
            capacity_tons: 0.0,
            plate_number: plate_number.to_string(),
            status: TruckStatus::default(),
        }
    }
}
