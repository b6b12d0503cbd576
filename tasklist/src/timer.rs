//! One-shot timers that dismiss validation errors.
//!
//! Each failed commit asks for a timer. The timer runs as its own tokio task,
//! sleeps for the configured delay and then posts a [`TimerEvent`] back to
//! the UI loop, which drains the receiver between frames. Timers are never
//! cancelled; the store decides whether a late one still matters.

use std::time::Duration;

use tasklist_core::Generation;
use tokio::sync::mpsc;

/// Events delivered from timers to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The error shown for this generation has been on screen long enough.
    ErrorExpired(Generation),
}

/// Spawns error auto-clear timers.
#[derive(Debug, Clone)]
pub struct ErrorTimer {
    tx: mpsc::Sender<TimerEvent>,
    delay: Duration,
}

impl ErrorTimer {
    /// Creates a timer handle and the receiver the UI loop should drain.
    #[must_use]
    pub fn channel(delay: Duration, capacity: usize) -> (Self, mpsc::Receiver<TimerEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx, delay }, rx)
    }

    /// The delay before an error is dismissed.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts a timer for `generation`. Must be called inside a tokio runtime.
    pub fn schedule(&self, generation: Generation) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tracing::debug!(%generation, ?delay, "scheduling error clear");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(TimerEvent::ErrorExpired(generation)).await.is_err() {
                tracing::debug!(%generation, "ui loop gone, dropping error clear");
            }
        });
    }
}
