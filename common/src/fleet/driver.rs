use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DriverId, DriverStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub surname: String,
    pub name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub phone_number: String,
    pub license_number: String,
    #[serde(default)]
    pub status: DriverStatus,
}

impl Driver {
    pub fn new(id: DriverId, surname: &str, name: &str) -> Self {
        Self {
            id,
            surname: surname.to_string(),
            name: name.to_string(),
            middle_name: None,
            birth_date: None,
            phone_number: String::new(),
            license_number: String::new(),
            status: DriverStatus::default(),
        }
    }

    /// "Surname Name", followed by the middle name when one is set.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.surname, self.name, middle)
            }
            _ => format!("{} {}", self.surname, self.name),
        }
    }
}
