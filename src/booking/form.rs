//! Booking form state machine
//!
//! Holds the doctor/date/time selection, the contact inputs and the
//! submission phase. It never schedules anything itself: callers receive
//! what they need to start the submission or the dismiss timer and report
//! back when those finish.

use crate::models::{BookingConfirmation, BookingRequest, ContactDetails, DoctorId, TimeSlot};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::fmt;

/// Submission lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    SuccessVisible,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::SuccessVisible => "success-visible",
        };
        f.write_str(name)
    }
}

/// Fields a real booking would need. Reported, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Doctor,
    Date,
    Time,
    FullName,
    Phone,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Date => "date",
            Self::Time => "time",
            Self::FullName => "full name",
            Self::Phone => "phone",
        }
    }
}

/// Identifies one showing of the success notice, so a dismiss timer left
/// over from an earlier booking cannot close a newer notice.
pub type NoticeTicket = u64;

#[derive(Debug, Clone)]
pub struct BookingForm {
    selected_doctor: Option<DoctorId>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    contact: ContactDetails,
    phase: SubmissionPhase,
    notice_ticket: NoticeTicket,
    last_error: Option<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            selected_doctor: None,
            selected_date: None,
            selected_time: None,
            contact: ContactDetails::default(),
            phase: SubmissionPhase::Idle,
            notice_ticket: 0,
            last_error: None,
        }
    }

    // ===== Selection =====

    pub fn select_doctor(&mut self, id: DoctorId) {
        if self.selected_doctor != Some(id) {
            debug!("Doctor {} selected", id);
            self.selected_doctor = Some(id);
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        if self.selected_date != Some(date) {
            debug!("Date {} selected", date);
            self.selected_date = Some(date);
        }
    }

    pub fn select_time(&mut self, slot: TimeSlot) {
        if self.selected_time.as_ref() != Some(&slot) {
            debug!("Time {} selected", slot);
            self.selected_time = Some(slot);
        }
    }

    pub fn selected_doctor(&self) -> Option<DoctorId> {
        self.selected_doctor
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_date_iso(&self) -> Option<String> {
        self.selected_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn selected_time(&self) -> Option<&TimeSlot> {
        self.selected_time.as_ref()
    }

    pub fn is_doctor_selected(&self, id: DoctorId) -> bool {
        self.selected_doctor == Some(id)
    }

    pub fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    pub fn is_time_selected(&self, slot: &TimeSlot) -> bool {
        self.selected_time.as_ref() == Some(slot)
    }

    // ===== Contact inputs =====

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn set_full_name(&mut self, value: String) {
        self.contact.full_name = value;
    }

    pub fn set_phone(&mut self, value: String) {
        self.contact.phone = value;
    }

    pub fn set_location(&mut self, value: String) {
        self.contact.location = value;
    }

    pub fn set_referred_by(&mut self, value: String) {
        self.contact.referred_by = value;
    }

    // ===== Submission lifecycle =====

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_success_visible(&self) -> bool {
        self.phase == SubmissionPhase::SuccessVisible
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Idle
    }

    pub fn notice_ticket(&self) -> NoticeTicket {
        self.notice_ticket
    }

    /// Message from the last failed submission, cleared on the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.selected_doctor.is_none() {
            missing.push(RequiredField::Doctor);
        }
        if self.selected_date.is_none() {
            missing.push(RequiredField::Date);
        }
        if self.selected_time.is_none() {
            missing.push(RequiredField::Time);
        }
        if self.contact.full_name.trim().is_empty() {
            missing.push(RequiredField::FullName);
        }
        if self.contact.phone.trim().is_empty() {
            missing.push(RequiredField::Phone);
        }
        missing
    }

    /// `Idle -> Submitting`. Returns the request to hand to a submitter, or
    /// `None` when the submit control is disabled.
    pub fn begin_submit(&mut self) -> Option<BookingRequest> {
        if !self.can_submit() {
            debug!("Submit ignored while {}", self.phase);
            return None;
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(RequiredField::as_str).collect();
            warn!("Submitting booking without {}", names.join(", "));
        }

        self.last_error = None;
        self.transition(SubmissionPhase::Submitting);
        Some(self.snapshot())
    }

    /// `Submitting -> SuccessVisible` on success, clearing every field, or
    /// `Submitting -> Idle` on failure, keeping them. Returns the ticket of
    /// the notice that now needs a dismiss timer.
    pub fn finish_submit(
        &mut self,
        outcome: Result<BookingConfirmation, String>,
    ) -> Option<NoticeTicket> {
        if self.phase != SubmissionPhase::Submitting {
            warn!("Submission result arrived while {}, ignoring", self.phase);
            return None;
        }

        match outcome {
            Ok(confirmation) => {
                info!("Booking confirmed at {}", confirmation.confirmed_at.format("%H:%M:%S"));
                self.clear_fields();
                self.notice_ticket += 1;
                self.transition(SubmissionPhase::SuccessVisible);
                Some(self.notice_ticket)
            }
            Err(error) => {
                warn!("Booking submission failed: {}", error);
                self.last_error = Some(error);
                self.transition(SubmissionPhase::Idle);
                None
            }
        }
    }

    /// Dismiss timer fired. Only closes the notice it was armed for.
    pub fn expire_notice(&mut self, ticket: NoticeTicket) -> bool {
        if self.phase == SubmissionPhase::SuccessVisible && ticket == self.notice_ticket {
            self.transition(SubmissionPhase::Idle);
            true
        } else {
            debug!("Stale dismiss timer {} ignored (current {})", ticket, self.notice_ticket);
            false
        }
    }

    /// Closes the notice ahead of its timer.
    pub fn dismiss_notice(&mut self) -> bool {
        if self.phase == SubmissionPhase::SuccessVisible {
            self.transition(SubmissionPhase::Idle);
            true
        } else {
            false
        }
    }

    fn snapshot(&self) -> BookingRequest {
        BookingRequest {
            doctor_id: self.selected_doctor,
            date: self.selected_date,
            time: self.selected_time.clone(),
            contact: self.contact.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.selected_doctor = None;
        self.selected_date = None;
        self.selected_time = None;
        self.contact.clear();
    }

    fn transition(&mut self, next: SubmissionPhase) {
        crate::utils::logging::log_phase_transition(self.phase, next);
        self.phase = next;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.select_doctor(1);
        form.select_date(date(5));
        form.select_time(TimeSlot::from("09:30 AM"));
        form.set_full_name("John Doe".to_string());
        form.set_phone("9999999999".to_string());
        form.set_location("Springfield".to_string());
        form.set_referred_by("Dr. House".to_string());
        form
    }

    fn confirm(form: &mut BookingForm) -> Option<NoticeTicket> {
        let request = form.begin_submit().expect("form should accept submit");
        form.finish_submit(Ok(BookingConfirmation::new(request)))
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = BookingForm::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(form.selected_doctor().is_none());
        assert!(form.selected_date().is_none());
        assert!(form.selected_time().is_none());
        assert!(form.contact().is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn test_selecting_another_doctor_replaces() {
        let mut form = BookingForm::new();
        form.select_doctor(3);
        form.select_doctor(5);
        assert_eq!(form.selected_doctor(), Some(5));
        assert!(!form.is_doctor_selected(3));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut once = BookingForm::new();
        once.select_doctor(2);
        once.select_date(date(3));
        once.select_time(TimeSlot::from("02:00 PM"));

        let mut twice = once.clone();
        twice.select_doctor(2);
        twice.select_date(date(3));
        twice.select_time(TimeSlot::from("02:00 PM"));

        assert_eq!(once.selected_doctor(), twice.selected_doctor());
        assert_eq!(once.selected_date(), twice.selected_date());
        assert_eq!(once.selected_time(), twice.selected_time());
        assert_eq!(twice.selected_date_iso().as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn test_submit_moves_to_submitting_and_disables_control() {
        let mut form = filled_form();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.doctor_id, Some(1));
        assert_eq!(request.contact.full_name, "John Doe");
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_clears_everything_immediately() {
        let mut form = filled_form();
        let ticket = confirm(&mut form);
        assert_eq!(ticket, Some(1));
        assert!(form.is_success_visible());
        assert!(form.selected_doctor().is_none());
        assert!(form.selected_date().is_none());
        assert!(form.selected_time().is_none());
        assert!(form.contact().is_empty());
    }

    #[test]
    fn test_empty_form_still_submits() {
        let mut form = BookingForm::new();
        assert_eq!(form.missing_fields().len(), 5);
        let ticket = confirm(&mut form).unwrap();
        assert!(form.is_success_visible());
        assert!(form.expire_notice(ticket));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle_and_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.finish_submit(Err("clinic offline".to_string())), None);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.selected_doctor(), Some(1));
        assert_eq!(form.contact().phone, "9999999999");
        assert_eq!(form.last_error(), Some("clinic offline"));

        form.begin_submit().unwrap();
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_result_outside_submitting_is_ignored() {
        let mut form = filled_form();
        let request = BookingRequest {
            doctor_id: None,
            date: None,
            time: None,
            contact: ContactDetails::default(),
        };
        assert!(form.finish_submit(Ok(BookingConfirmation::new(request))).is_none());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.selected_doctor(), Some(1));
    }

    #[test]
    fn test_early_dismissal() {
        let mut form = BookingForm::new();
        let ticket = confirm(&mut form).unwrap();
        assert!(form.dismiss_notice());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(!form.expire_notice(ticket));
        assert!(!form.dismiss_notice());
    }

    #[test]
    fn test_stale_ticket_does_not_close_newer_notice() {
        let mut form = BookingForm::new();
        let first = confirm(&mut form).unwrap();
        form.dismiss_notice();
        let second = confirm(&mut form).unwrap();
        assert_ne!(first, second);
        assert!(!form.expire_notice(first));
        assert!(form.is_success_visible());
        assert!(form.expire_notice(second));
    }

    #[test]
    fn test_selection_allowed_while_submitting() {
        let mut form = BookingForm::new();
        form.begin_submit().unwrap();
        form.select_doctor(4);
        assert_eq!(form.selected_doctor(), Some(4));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_missing_fields_ignore_optional_inputs() {
        let mut form = filled_form();
        form.set_location(String::new());
        form.set_referred_by(String::new());
        assert!(form.missing_fields().is_empty());

        form.set_phone("   ".to_string());
        assert_eq!(form.missing_fields(), vec![RequiredField::Phone]);
    }
}
