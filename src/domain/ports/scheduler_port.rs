//! Timer scheduling port definition.

use std::time::Duration;

/// Deferred work run once when its timer fires.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Port for one-shot timers. Scheduled tasks cannot be cancelled.
pub trait SchedulerPort: Send + Sync {
    /// Runs `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}
