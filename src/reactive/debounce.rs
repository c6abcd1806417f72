//! Cancel-and-reschedule timer.

use crate::error::{FormError, FormResult};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Runs a callback once a quiet period has passed since the last `schedule` call.
///
/// Every `schedule` aborts the pending timer and arms a new one with a fresh
/// generation number. The callback receives its generation so the owner can
/// check [`Debouncer::is_current`] under its own lock and ignore a timer that
/// was superseded while it was waking up. Dropping the debouncer aborts the
/// pending timer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The runtime timers are spawned on.
    ///
    /// # Errors
    ///
    /// Returns `FormError::NoRuntime` when called outside a Tokio runtime.
    pub fn runtime() -> FormResult<Handle> {
        Handle::try_current().map_err(|_| FormError::NoRuntime)
    }

    /// Arm the timer, replacing any pending one. Returns the new generation.
    ///
    /// The deadline is fixed here, not when the timer task first runs.
    ///
    /// # Errors
    ///
    /// Returns `FormError::NoRuntime` when called outside a Tokio runtime.
    pub fn schedule<F>(&mut self, callback: F) -> FormResult<u64>
    where
        F: FnOnce(u64) + Send + 'static,
    {
        let runtime = Self::runtime()?;

        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let deadline = Instant::now() + self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback(generation);
        }));

        Ok(generation)
    }

    /// Whether `generation` belongs to the most recent `schedule` call.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
