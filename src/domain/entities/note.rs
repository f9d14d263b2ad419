//! Note entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{MeetingId, NoteId};
use crate::domain::serde_utils::iso_datetime;

/// A Markdown note attached to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub meeting_id: MeetingId,
    #[serde(default, with = "iso_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "iso_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Notes listing for one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}
