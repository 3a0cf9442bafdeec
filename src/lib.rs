// Carebook Library
// Exposes the booking form core for testing and reuse

pub mod app;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use app::{AppFlags, CarebookApp};
pub use booking::{BookingForm, BookingSubmitter, SimulatedSubmitter, SubmissionPhase, TimerKind, TimerScope};
pub use calendar::DateWindow;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
