//! Booking submission seam
//!
//! The form only knows that a submitter eventually answers with a
//! confirmation or an error. The bundled implementation pretends to talk to
//! a clinic by waiting a fixed delay.

use crate::error::AppResult;
use crate::models::{BookingConfirmation, BookingRequest};
use iced::futures::future::BoxFuture;
use iced::futures::FutureExt;
use log::info;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
pub trait BookingSubmitter: Send + Sync {
    fn submit(&self, request: BookingRequest) -> BoxFuture<'static, AppResult<BookingConfirmation>>;
}

/// Stands in for a network round-trip: waits `delay`, then always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl BookingSubmitter for SimulatedSubmitter {
    fn submit(&self, request: BookingRequest) -> BoxFuture<'static, AppResult<BookingConfirmation>> {
        let delay = self.delay;
        async move {
            info!("Simulating booking submission ({}ms)", delay.as_millis());
            tokio::time::sleep(delay).await;
            Ok(BookingConfirmation::new(request))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::ContactDetails;
    use std::sync::Arc;

    fn empty_request() -> BookingRequest {
        BookingRequest {
            doctor_id: None,
            date: None,
            time: None,
            contact: ContactDetails::default(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_then_confirms() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let confirmation = submitter.submit(empty_request()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(confirmation.request, empty_request());
    }

    #[tokio::test]
    async fn test_mock_submitter_can_fail() {
        let mut mock = MockBookingSubmitter::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| async { Err(AppError::submission("clinic offline")) }.boxed());

        let submitter: Arc<dyn BookingSubmitter> = Arc::new(mock);
        let result = submitter.submit(empty_request()).await;
        assert!(matches!(result, Err(AppError::Submission(_))));
    }
}
