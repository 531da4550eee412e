// src/infrastructure/debounce.rs
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Cancellable quiescence timer for rapidly changing input.
///
/// Every `input` call replaces the pending value and restarts the timer;
/// only a timer that expires uncancelled releases the value downstream.
/// `settled` never resolves while nothing is pending, which makes it safe
/// to use as one arm of a `select!` event loop. It is also cancel-safe:
/// dropping the future mid-wait keeps the pending value and its deadline.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Feed a new input value, restarting the quiescence timer.
    pub fn input(&mut self, value: impl Into<String>) {
        self.pending = Some(value.into());
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Discard any pending value and stop the timer.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve with the pending value once the timer expires uncancelled.
    pub async fn settled(&mut self) -> String {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
                self.pending.take().unwrap_or_default()
            }
            None => std::future::pending().await,
        }
    }
}
