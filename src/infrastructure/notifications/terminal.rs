//! Renders flash messages on stderr as they appear.

use std::io::Write;
use std::sync::Arc;

use crossterm::style::Stylize;

use super::FlashBoard;
use crate::domain::notification::{FlashCategory, FlashId, FlashMessage};
use crate::domain::ports::NotificationSink;

/// Prints each message once and tracks it on a [`FlashBoard`].
pub struct TerminalFlashSink {
    board: Arc<FlashBoard>,
    colored: bool,
}

impl TerminalFlashSink {
    #[must_use]
    pub fn new(board: Arc<FlashBoard>, colored: bool) -> Self {
        Self { board, colored }
    }

    #[must_use]
    pub fn board(&self) -> &Arc<FlashBoard> {
        &self.board
    }

    fn render(&self, message: &FlashMessage) -> String {
        let label = format!("[{}]", message.category);
        if !self.colored {
            return format!("{label} {}", message.message);
        }
        let label = match message.category {
            FlashCategory::Success => label.green(),
            FlashCategory::Danger => label.red(),
            FlashCategory::Warning => label.yellow(),
            FlashCategory::Info => label.cyan(),
        };
        format!("{} {}", label.bold(), message.message)
    }
}

impl NotificationSink for TerminalFlashSink {
    fn append(&self, message: &FlashMessage) {
        self.board.append(message);
        let line = self.render(message);
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{line}") {
            tracing::warn!(error = %e, "Failed to print flash message");
        }
    }

    fn remove(&self, id: FlashId) {
        self.board.remove(id);
    }
}
