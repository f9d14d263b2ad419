//! Tokio-backed timers.

use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::time::{Instant, sleep_until};
use tracing::trace;

use crate::domain::ports::{ScheduledTask, SchedulerPort};

/// Spawns one sleeping task per scheduled timer.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is running on.
    ///
    /// # Errors
    /// Returns error when called outside a tokio runtime.
    pub fn from_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl SchedulerPort for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        // Deadline is fixed at call time, not when the task is first polled.
        let deadline = Instant::now() + delay;
        trace!(delay_ms = delay.as_millis(), "Scheduling timer");
        self.handle.spawn(async move {
            sleep_until(deadline).await;
            task();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_fires_exactly_at_deadline() {
        let scheduler = TokioScheduler::from_current().unwrap();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        scheduler.schedule(
            Duration::from_millis(5000),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::advance(Duration::from_millis(4999)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_timers() {
        let scheduler = TokioScheduler::from_current().unwrap();
        let fired = Arc::new(AtomicUsize::new(0));

        for delay in [1000, 5000] {
            let counter = fired.clone();
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_millis(4000)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_current_outside_runtime() {
        assert!(TokioScheduler::from_current().is_err());
    }
}
