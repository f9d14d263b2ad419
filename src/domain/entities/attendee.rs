//! Attendee entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{AttendeeId, MeetingId};
use crate::domain::serde_utils::iso_datetime;

/// A person attending a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    pub meeting_id: MeetingId,
    #[serde(default, with = "iso_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
}

/// Attendee listing for one meeting, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeList {
    pub attendees: Vec<Attendee>,
}
