use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::notification::{FlashId, FlashMessage};
use crate::domain::ports::NotificationSink;

/// In-memory notification container, in append order.
#[derive(Debug, Default)]
pub struct FlashBoard {
    messages: Mutex<Vec<FlashMessage>>,
}

impl FlashBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages currently shown.
    #[must_use]
    pub fn visible(&self) -> Vec<FlashMessage> {
        self.messages.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl NotificationSink for FlashBoard {
    fn append(&self, message: &FlashMessage) {
        self.messages.lock().push(message.clone());
    }

    fn remove(&self, id: FlashId) {
        self.messages.lock().retain(|m| m.id != id);
    }
}

/// Forwards every message to each inner sink.
#[derive(Default)]
pub struct CompositeSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl CompositeSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl NotificationSink for CompositeSink {
    fn append(&self, message: &FlashMessage) {
        for sink in &self.sinks {
            sink.append(message);
        }
    }

    fn remove(&self, id: FlashId) {
        for sink in &self.sinks {
            sink.remove(id);
        }
    }
}
