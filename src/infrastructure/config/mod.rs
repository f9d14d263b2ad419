//! Application configuration.

pub mod app_config;
pub mod args;
pub mod state_config;
pub mod storage;

pub use app_config::{
    AppConfig, LogLevel, NotificationsConfig, ServerConfig, SessionConfig, SessionStorageKind,
};
pub use args::{
    AttendeeCommand, CliArgs, Command, MeetingCommand, MeetingFields, MeetingUpdateFields,
    NoteCommand,
};
pub use state_config::StateConfig;
pub use storage::{ConfigError, StorageManager};
