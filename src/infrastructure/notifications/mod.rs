//! Flash message containers.

mod board;
mod desktop;
mod terminal;

pub use board::{CompositeSink, FlashBoard};
pub use desktop::DesktopNotificationService;
pub use terminal::TerminalFlashSink;
