// file: src/models/mod.rs

pub mod booking;
pub mod catalog;
pub mod date_option;
pub mod doctor;
pub mod time_slot;

// Flatten so callers can write `crate::models::Doctor`.
pub use booking::{BookingConfirmation, BookingRequest, ContactDetails};
pub use catalog::Catalog;
pub use date_option::DateOption;
pub use doctor::{Doctor, DoctorId};
pub use time_slot::TimeSlot;
