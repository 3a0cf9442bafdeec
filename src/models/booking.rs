// file: src/models/booking.rs
use super::doctor::DoctorId;
use super::time_slot::TimeSlot;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Raw text typed into the four contact inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub referred_by: String,
}

impl ContactDetails {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.referred_by.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of the form handed to a submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: Option<DoctorId>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub contact: ContactDetails,
}

impl BookingRequest {
    /// Summary safe for logs: no names or phone numbers.
    pub fn redacted_summary(&self) -> String {
        let filled: Vec<&str> = [
            ("name", !self.contact.full_name.is_empty()),
            ("phone", !self.contact.phone.is_empty()),
            ("location", !self.contact.location.is_empty()),
            ("referral", !self.contact.referred_by.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, set)| set.then_some(field))
        .collect();

        format!(
            "doctor={} date={} time={} contact=[{}]",
            self.doctor_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".to_string()),
            self.time.as_ref().map(|t| t.label()).unwrap_or("-"),
            filled.join(",")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub request: BookingRequest,
    pub confirmed_at: DateTime<Local>,
}

impl BookingConfirmation {
    pub fn new(request: BookingRequest) -> Self {
        Self {
            request,
            confirmed_at: Local::now(),
        }
    }
}
