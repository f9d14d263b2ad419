//! Account entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::domain::serde_utils::iso_datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, with = "iso_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload of the login and registration endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

/// Payload of the current-user endpoint; `user` is null when signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user: Option<User>,
}
