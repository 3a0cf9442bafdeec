//! UI state management module
//!
//! Presentation-only state that does not belong to the booking form: the
//! status line and the clock driving the success notice animations.

use crate::ui::animation::{Animation, Frame};
use iced::time::Instant;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NoticeClock {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl NoticeClock {
    pub fn new() -> Self {
        Self {
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Restarts both animations from their first frame.
    pub fn restart(&mut self) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
    }

    /// The first frame after a restart becomes the animations' origin.
    pub fn tick(&mut self, now: Instant) {
        match self.started_at {
            Some(started) => self.elapsed = now.saturating_duration_since(started),
            None => {
                self.started_at = Some(now);
                self.elapsed = Duration::ZERO;
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self, animations: &[&Animation]) -> bool {
        animations.iter().any(|animation| !animation.is_finished(self.elapsed))
    }
}

impl Default for NoticeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    /// Shown under the submit button, e.g. a failed submission
    pub status_message: Option<String>,

    pub notice_clock: NoticeClock,

    pub appear: Animation,
    pub check: Animation,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            status_message: None,
            notice_clock: NoticeClock::new(),
            appear: Animation::success_appear(),
            check: Animation::success_check(),
        }
    }

    pub fn notice_animating(&self) -> bool {
        self.notice_clock.is_running(&[&self.appear, &self.check])
    }

    pub fn appear_frame(&self) -> Frame {
        self.appear.sample(self.notice_clock.elapsed())
    }

    pub fn check_frame(&self) -> Frame {
        self.check.sample(self.notice_clock.elapsed())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
