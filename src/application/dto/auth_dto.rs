//! Authentication DTOs.

use serde::Serialize;

use crate::domain::entities::User;

/// Where the active session cookie came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Passed on the command line or through the environment.
    CommandLine,
    /// Loaded from session storage.
    Stored,
    /// Issued by a login or registration in this run.
    Login,
}

impl SessionSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CommandLine => "command line / environment",
            Self::Stored => "session storage",
            Self::Login => "login",
        }
    }
}

impl std::fmt::Display for SessionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Whether to keep the issued session for later runs.
    #[serde(skip)]
    pub persist_session: bool,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            persist_session: true,
        }
    }

    /// Disables session persistence.
    #[must_use]
    pub fn without_persistence(mut self) -> Self {
        self.persist_session = false;
        self
    }
}

/// Account registration data. The server signs the new account in.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Authenticated user.
    pub user: User,
    /// Whether the session was persisted.
    pub session_persisted: bool,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(user: User, session_persisted: bool) -> Self {
        Self {
            user,
            session_persisted,
        }
    }
}
