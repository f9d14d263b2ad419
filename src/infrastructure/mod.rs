//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP transport.
pub mod http;
pub mod navigator;
/// Flash message containers.
pub mod notifications;
pub mod scheduler;
/// Session storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use http::ReqwestHttpClient;
pub use navigator::TerminalNavigator;
pub use notifications::{CompositeSink, DesktopNotificationService, FlashBoard, TerminalFlashSink};
pub use scheduler::TokioScheduler;
pub use storage::{FileSessionStorage, session_storage};
