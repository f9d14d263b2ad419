//! Presentation layer: command dispatch and terminal output.

/// Command dispatch.
pub mod commands;
/// Text rendering.
pub mod output;

pub use commands::{CommandRunner, Outcome};
