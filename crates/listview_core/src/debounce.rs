use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Quiet period for free-text and user-directory search input.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable delayed delivery of the latest scheduled value.
///
/// Every `schedule` restarts the quiet period, so a burst of inputs yields a
/// single value: the last one.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T) {
        self.pending = Some(Pending {
            value,
            deadline: Instant::now() + self.delay,
        });
    }

    /// Drop the pending value. Cancelling when nothing is pending is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The pending value if its quiet period has already elapsed.
    pub fn take_if_due(&mut self) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| p.deadline <= Instant::now());

        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Wait out the quiet period and yield the pending value.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn settled(&mut self) -> Option<T> {
        let deadline = self.deadline()?;
        sleep_until(deadline).await;
        self.pending.take().map(|p| p.value)
    }
}
