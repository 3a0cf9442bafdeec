// file: src/models/catalog.rs
use super::doctor::{Doctor, DoctorId};
use super::time_slot::TimeSlot;
use serde::{Deserialize, Serialize};

/// Doctors and time slots offered by the form.
///
/// Loaded from configuration so a real clinic backend can replace the
/// built-in list without touching the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub doctors: Vec<Doctor>,
    pub time_slots: Vec<TimeSlot>,
}

impl Catalog {
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn has_time_slot(&self, slot: &TimeSlot) -> bool {
        self.time_slots.contains(slot)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            doctors: vec![
                Doctor::new(1, "Dr. Sarah Wilson", "Cardiologist", "Mon, Wed, Fri"),
                Doctor::new(2, "Dr. James Miller", "Neurologist", "Tue, Thu, Sat"),
                Doctor::new(3, "Dr. Emily Chen", "Pediatrician", "Mon, Tue, Wed"),
                Doctor::new(4, "Dr. Michael Davis", "Dermatologist", "Wed, Thu, Fri"),
                Doctor::new(5, "Dr. Lisa Thompson", "Orthopedist", "Mon, Thu, Sat"),
                Doctor::new(6, "Dr. Robert Johnson", "Psychiatrist", "Tue, Fri, Sat"),
            ],
            time_slots: [
                "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
                "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
            ]
            .into_iter()
            .map(TimeSlot::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.doctors.len(), 6);
        assert_eq!(catalog.time_slots.len(), 12);
        assert_eq!(catalog.time_slots[0].label(), "09:00 AM");
        assert_eq!(catalog.time_slots[6].label(), "02:00 PM");
        assert_eq!(catalog.time_slots[11].label(), "04:30 PM");
    }

    #[test]
    fn test_doctor_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.doctor(5).map(|d| d.name.as_str()), Some("Dr. Lisa Thompson"));
        assert!(catalog.doctor(42).is_none());
    }

    #[test]
    fn test_time_slot_membership() {
        let catalog = Catalog::default();
        assert!(catalog.has_time_slot(&TimeSlot::from("03:30 PM")));
        assert!(!catalog.has_time_slot(&TimeSlot::from("12:00 PM")));
    }
}
