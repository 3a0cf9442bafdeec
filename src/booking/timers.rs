//! Lifetime-bound delays
//!
//! The form runs two delays: the submission round-trip and the success
//! notice auto-dismiss. Each is armed as a child of one root token owned by
//! the application, so closing the window releases both at once.

use log::{debug, info};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Submission,
    SuccessDismiss,
}

#[derive(Debug)]
pub struct TimerScope {
    root: CancellationToken,
    armed: HashMap<TimerKind, CancellationToken>,
}

impl TimerScope {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            armed: HashMap::new(),
        }
    }

    /// Arms `kind`, cancelling whatever was previously armed for it.
    ///
    /// After teardown the returned token is already cancelled.
    pub fn arm(&mut self, kind: TimerKind) -> CancellationToken {
        let token = self.root.child_token();
        if let Some(previous) = self.armed.insert(kind, token.clone()) {
            previous.cancel();
        }
        debug!("Armed {:?} timer", kind);
        token
    }

    /// Cancels `kind` if it is still pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.armed.remove(&kind) {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                debug!("Cancelled {:?} timer", kind);
                true
            }
            _ => false,
        }
    }

    /// Forgets a timer that has fired.
    pub fn complete(&mut self, kind: TimerKind) {
        self.armed.remove(&kind);
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed
            .get(&kind)
            .map(|token| !token.is_cancelled())
            .unwrap_or(false)
    }

    /// Cancels every pending timer, now and for good.
    pub fn teardown(&mut self) {
        if !self.root.is_cancelled() {
            info!("Releasing {} pending timer(s)", self.armed.len());
        }
        self.root.cancel();
        self.armed.clear();
    }

    pub fn is_torn_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Default for TimerScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerScope {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

/// Sleeps for `delay`; `false` if the token was cancelled first.
pub async fn sleep_unless_cancelled(token: CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = sleep(delay) => true,
    }
}

/// Drives `work` to completion unless the token is cancelled first.
pub async fn run_unless_cancelled<F>(token: CancellationToken, work: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        output = work => Some(output),
    }
}
