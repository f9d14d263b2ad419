//! meetnote - A lightweight terminal client for the Meeting Notes service.
//!
//! This crate wraps the service's JSON API behind helpers that each send one
//! request and report the outcome as a short-lived flash message, with
//! clean architecture layers and a command-line front end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing helpers, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing command dispatch and terminal output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "meetnote";
