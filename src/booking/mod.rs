// Booking module
// Form state machine, the submission seam and the delays that drive it

pub mod form;
pub mod submitter;
pub mod timers;

pub use form::{BookingForm, NoticeTicket, RequiredField, SubmissionPhase};
pub use submitter::{BookingSubmitter, SimulatedSubmitter};
pub use timers::{run_unless_cancelled, sleep_unless_cancelled, TimerKind, TimerScope};
