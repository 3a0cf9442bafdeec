use crate::booking::{NoticeTicket, TimerKind};
use crate::models::{BookingConfirmation, DoctorId, TimeSlot};
use chrono::NaiveDate;

/// Unified application message type
///
/// Messages are grouped by where they come from: pointer input on the form,
/// text input, the submission pipeline, timers and the window.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Selection Messages =====
    /// A doctor card was pressed
    DoctorSelected(DoctorId),
    /// A date chip was pressed
    DateSelected(NaiveDate),
    /// A time chip was pressed
    TimeSelected(TimeSlot),

    // ===== Form Input Messages =====
    FullNameChanged(String),
    PhoneChanged(String),
    LocationChanged(String),
    ReferredByChanged(String),

    // ===== Submission Messages =====
    /// The "Book Appointment" button was pressed
    SubmitPressed,
    /// The submitter answered
    BookingSubmitted(Result<BookingConfirmation, String>),

    // ===== Success Notice Messages =====
    /// Auto-dismiss delay for the given notice elapsed
    SuccessTimerElapsed(NoticeTicket),
    /// The notice was pressed before its timer fired
    DismissSuccess,
    /// Window frame while the notice animations are playing
    AnimationFrame(iced::time::Instant),

    // ===== Timer & Window Messages =====
    /// A scheduled delay was cancelled before it fired
    TimerCancelled(TimerKind),
    /// The placeholder "Contact" link was pressed
    ContactPressed,
    /// The window is about to close
    CloseRequested,
}
