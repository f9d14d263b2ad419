use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::notification::{FlashCategory, FlashId, FlashMessage};
use crate::domain::ports::{NotificationSink, SchedulerPort};

/// How long a flash message stays in its container.
pub const FLASH_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Shows flash messages and schedules their removal.
///
/// Every call produces its own message with its own timer; nothing is
/// deduplicated or queued.
#[derive(Clone)]
pub struct FlashNotifier {
    sink: Arc<dyn NotificationSink>,
    scheduler: Arc<dyn SchedulerPort>,
}

impl FlashNotifier {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>, scheduler: Arc<dyn SchedulerPort>) -> Self {
        Self { sink, scheduler }
    }

    pub fn show(&self, message: impl Into<String>, category: FlashCategory) -> FlashId {
        let flash = FlashMessage::new(category, message);
        let id = flash.id;
        debug!(%category, message = %flash.message, "Showing flash message");
        self.sink.append(&flash);

        let sink = Arc::clone(&self.sink);
        self.scheduler
            .schedule(FLASH_DISMISS_AFTER, Box::new(move || sink.remove(id)));
        id
    }

    pub fn info(&self, message: impl Into<String>) -> FlashId {
        self.show(message, FlashCategory::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> FlashId {
        self.show(message, FlashCategory::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> FlashId {
        self.show(message, FlashCategory::Warning)
    }

    pub fn danger(&self, message: impl Into<String>) -> FlashId {
        self.show(message, FlashCategory::Danger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{ManualScheduler, MockNotificationSink};

    fn setup() -> (FlashNotifier, Arc<MockNotificationSink>, Arc<ManualScheduler>) {
        let sink = Arc::new(MockNotificationSink::new());
        let scheduler = Arc::new(ManualScheduler::new());
        let notifier = FlashNotifier::new(sink.clone(), scheduler.clone());
        (notifier, sink, scheduler)
    }

    #[test]
    fn test_message_is_appended_immediately() {
        let (notifier, sink, _) = setup();
        notifier.info("Hello");
        assert_eq!(sink.visible(), vec![(FlashCategory::Info, "Hello".to_string())]);
    }

    #[test]
    fn test_dismissed_after_five_seconds_not_before() {
        let (notifier, sink, scheduler) = setup();
        notifier.success("Saved");

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(sink.visible().len(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert!(sink.visible().is_empty());
    }

    #[test]
    fn test_repeated_messages_keep_their_own_timers() {
        let (notifier, sink, scheduler) = setup();
        notifier.danger("First");
        scheduler.advance(Duration::from_secs(3));
        notifier.danger("First");

        assert_eq!(sink.visible().len(), 2);

        scheduler.advance(Duration::from_secs(2));
        assert_eq!(sink.visible().len(), 1);

        scheduler.advance(Duration::from_secs(3));
        assert!(sink.visible().is_empty());
        assert_eq!(sink.history().len(), 2);
    }

    #[test]
    fn test_visible_in_append_order() {
        let (notifier, sink, _) = setup();
        notifier.info("a");
        notifier.warning("b");
        notifier.danger("c");

        let categories: Vec<_> = sink.visible().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![FlashCategory::Info, FlashCategory::Warning, FlashCategory::Danger]
        );
    }
}
