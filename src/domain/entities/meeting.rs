//! Meeting entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Attendee, MeetingId, Note, UserId};
use crate::domain::serde_utils::iso_datetime;

/// A meeting as returned by the server.
///
/// `notes` and `attendees` are only populated by the single-meeting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "iso_datetime::option")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, with = "iso_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "iso_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub creator_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,
}

/// One page of the meeting listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPage {
    pub meetings: Vec<Meeting>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub pages: u32,
}

const fn first_page() -> u32 {
    1
}

impl MeetingPage {
    /// Returns whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }
}
