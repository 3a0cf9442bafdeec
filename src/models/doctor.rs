// file: src/models/doctor.rs
use serde::{Deserialize, Serialize};

pub type DoctorId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub availability: String, // display only, never used to filter dates
}

impl Doctor {
    pub fn new(id: DoctorId, name: &str, specialty: &str, availability: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            availability: availability.to_string(),
        }
    }

    pub fn availability_line(&self) -> String {
        format!("Available: {}", self.availability)
    }
}
