//! Request bodies and filters for meetings, notes, and attendees.
//!
//! Values are passed to the server as given; validation is the server's job.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::entities::MeetingId;
use crate::domain::serde_utils::iso_datetime;

/// Filters for the meeting listing. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingQuery {
    pub search: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl MeetingQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            date: date.into(),
            page: None,
            per_page: None,
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Fields of a meeting to create. Omitted fields take server defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeetingDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "iso_datetime::option"
    )]
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl MeetingDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Partial meeting update; only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeetingChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "iso_datetime::option"
    )]
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl MeetingChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub meeting_id: MeetingId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteChanges {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAttendee {
    pub meeting_id: MeetingId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_draft_omits_unset_fields() {
        let body = serde_json::to_value(MeetingDraft::new("Standup")).unwrap();
        assert_eq!(body, json!({"title": "Standup"}));
    }

    #[test]
    fn test_draft_sends_date_in_isoformat() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let body = serde_json::to_value(
            MeetingDraft::new("Standup")
                .with_date(date)
                .with_location("Room A"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"title": "Standup", "date": "2025-10-15T09:00:00", "location": "Room A"})
        );
    }

    #[test]
    fn test_changes_only_present_fields() {
        let changes = MeetingChanges {
            location: Some("Room B".into()),
            ..MeetingChanges::default()
        };
        assert!(!changes.is_empty());
        assert_eq!(serde_json::to_value(changes).unwrap(), json!({"location": "Room B"}));
        assert!(MeetingChanges::default().is_empty());
    }

    #[test]
    fn test_note_and_attendee_bodies() {
        let note = NewNote {
            meeting_id: MeetingId(3),
            content: "# Agenda".into(),
        };
        assert_eq!(
            serde_json::to_value(note).unwrap(),
            json!({"meeting_id": 3, "content": "# Agenda"})
        );

        let attendee = NewAttendee {
            meeting_id: MeetingId(3),
            name: "Grace".into(),
            email: "grace@example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(attendee).unwrap(),
            json!({"meeting_id": 3, "name": "Grace", "email": "grace@example.com"})
        );
    }
}
