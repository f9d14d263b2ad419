//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Client helpers and supporting services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, MeetingQuery, SessionSource};
pub use services::{FlashNotifier, MeetingNotesClient};
pub use use_cases::{LoginUseCase, LogoutUseCase, ResolveSessionUseCase};
