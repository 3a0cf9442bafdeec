// file: src/models/time_slot.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable time of day, kept as the literal label shown on its chip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
