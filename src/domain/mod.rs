//! Domain layer with entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Flash message definitions.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{Meeting, MeetingId, SessionCookie};
pub use errors::{ApiError, StorageError};
pub use notification::{FlashCategory, FlashId, FlashMessage};
pub use ports::{HttpPort, NavigatorPort, NotificationSink, SchedulerPort, SessionStoragePort};
