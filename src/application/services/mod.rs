pub mod date_format;
pub mod endpoints;
pub mod flash_notifier;
pub mod meeting_notes_client;

pub use flash_notifier::{FlashNotifier, FLASH_DISMISS_AFTER};
pub use meeting_notes_client::MeetingNotesClient;
