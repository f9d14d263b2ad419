//! Notification sink port definition.

use crate::domain::notification::{FlashId, FlashMessage};

/// Container that displays flash messages until they are removed.
pub trait NotificationSink: Send + Sync {
    /// Appends a message after any already visible.
    fn append(&self, message: &FlashMessage);

    /// Removes a message; unknown ids are ignored.
    fn remove(&self, id: FlashId);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use crate::domain::notification::FlashCategory;
    use parking_lot::Mutex;

    #[derive(Default)]
    pub struct MockNotificationSink {
        visible: Mutex<Vec<FlashMessage>>,
        history: Mutex<Vec<FlashMessage>>,
    }

    impl MockNotificationSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Messages currently in the container.
        pub fn visible(&self) -> Vec<(FlashCategory, String)> {
            self.visible
                .lock()
                .iter()
                .map(|m| (m.category, m.message.clone()))
                .collect()
        }

        /// Every message ever appended, in order.
        pub fn history(&self) -> Vec<(FlashCategory, String)> {
            self.history
                .lock()
                .iter()
                .map(|m| (m.category, m.message.clone()))
                .collect()
        }

        pub fn last(&self) -> Option<(FlashCategory, String)> {
            self.history().pop()
        }
    }

    impl NotificationSink for MockNotificationSink {
        fn append(&self, message: &FlashMessage) {
            self.visible.lock().push(message.clone());
            self.history.lock().push(message.clone());
        }

        fn remove(&self, id: FlashId) {
            self.visible.lock().retain(|m| m.id != id);
        }
    }
}
