//! Request builders for every endpoint the client talks to.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::application::dto::{
    AttendeeChanges, LoginRequest, MeetingChanges, MeetingDraft, MeetingQuery, NewAttendee,
    NewNote, NoteChanges, RegisterRequest,
};
use crate::domain::entities::{AttendeeId, MeetingId, NoteId};
use crate::domain::ports::HttpRequest;

pub const MEETINGS_PATH: &str = "/api/meetings";
pub const NOTES_PATH: &str = "/api/notes";
pub const ATTENDEES_PATH: &str = "/api/attendees";
pub const LOGIN_PATH: &str = "/auth/api/login";
pub const REGISTER_PATH: &str = "/auth/api/register";
pub const LOGOUT_PATH: &str = "/auth/api/logout";
pub const CURRENT_USER_PATH: &str = "/auth/api/current-user";
pub const LOGIN_PAGE: &str = "/auth/login";

/// Builds the listing URL.
///
/// Always ends in `?` or `&`: each non-empty filter is appended as
/// `key=value&`, so `("foo", "")` gives `/api/meetings?search=foo&`.
#[must_use]
pub fn meetings_url(query: &MeetingQuery) -> String {
    let mut url = format!("{MEETINGS_PATH}?");
    if !query.search.is_empty() {
        url.push_str(&format!("search={}&", urlencoding::encode(&query.search)));
    }
    if !query.date.is_empty() {
        url.push_str(&format!("date={}&", urlencoding::encode(&query.date)));
    }
    if let Some(page) = query.page {
        url.push_str(&format!("page={page}&"));
    }
    if let Some(per_page) = query.per_page {
        url.push_str(&format!("per_page={per_page}&"));
    }
    url
}

fn json_body<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        error!(error = %e, "Failed to serialize request body, sending null");
        Value::Null
    })
}

#[must_use]
pub fn list_meetings(query: &MeetingQuery) -> HttpRequest {
    HttpRequest::get(meetings_url(query))
}

#[must_use]
pub fn get_meeting(id: MeetingId) -> HttpRequest {
    HttpRequest::get(format!("{MEETINGS_PATH}/{id}"))
}

#[must_use]
pub fn create_meeting(draft: &MeetingDraft) -> HttpRequest {
    HttpRequest::post(MEETINGS_PATH).with_body(json_body(draft))
}

#[must_use]
pub fn update_meeting(id: MeetingId, changes: &MeetingChanges) -> HttpRequest {
    HttpRequest::put(format!("{MEETINGS_PATH}/{id}")).with_body(json_body(changes))
}

#[must_use]
pub fn delete_meeting(id: MeetingId) -> HttpRequest {
    HttpRequest::delete(format!("{MEETINGS_PATH}/{id}"))
}

#[must_use]
pub fn list_notes(meeting_id: MeetingId) -> HttpRequest {
    HttpRequest::get(format!("{NOTES_PATH}?meeting_id={meeting_id}"))
}

#[must_use]
pub fn create_note(note: &NewNote) -> HttpRequest {
    HttpRequest::post(NOTES_PATH).with_body(json_body(note))
}

#[must_use]
pub fn update_note(id: NoteId, changes: &NoteChanges) -> HttpRequest {
    HttpRequest::put(format!("{NOTES_PATH}/{id}")).with_body(json_body(changes))
}

#[must_use]
pub fn delete_note(id: NoteId) -> HttpRequest {
    HttpRequest::delete(format!("{NOTES_PATH}/{id}"))
}

#[must_use]
pub fn list_attendees(meeting_id: MeetingId) -> HttpRequest {
    HttpRequest::get(format!("{ATTENDEES_PATH}?meeting_id={meeting_id}"))
}

#[must_use]
pub fn create_attendee(attendee: &NewAttendee) -> HttpRequest {
    HttpRequest::post(ATTENDEES_PATH).with_body(json_body(attendee))
}

#[must_use]
pub fn update_attendee(id: AttendeeId, changes: &AttendeeChanges) -> HttpRequest {
    HttpRequest::put(format!("{ATTENDEES_PATH}/{id}")).with_body(json_body(changes))
}

#[must_use]
pub fn delete_attendee(id: AttendeeId) -> HttpRequest {
    HttpRequest::delete(format!("{ATTENDEES_PATH}/{id}"))
}

#[must_use]
pub fn login(request: &LoginRequest) -> HttpRequest {
    HttpRequest::post(LOGIN_PATH).with_body(json_body(request))
}

#[must_use]
pub fn register(request: &RegisterRequest) -> HttpRequest {
    HttpRequest::post(REGISTER_PATH).with_body(json_body(request))
}

#[must_use]
pub fn logout() -> HttpRequest {
    HttpRequest::post(LOGOUT_PATH)
}

#[must_use]
pub fn current_user() -> HttpRequest {
    HttpRequest::get(CURRENT_USER_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpMethod;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_unserializable_body_falls_back_to_null() {
        let mut by_slot = std::collections::BTreeMap::new();
        by_slot.insert((9_u8, 30_u8), "standup");
        assert_eq!(json_body(&by_slot), Value::Null);
        assert_eq!(json_body(&json!({"content": "x"})), json!({"content": "x"}));
    }

    #[test_case("foo", "", "/api/meetings?search=foo&" ; "search_only")]
    #[test_case("", "", "/api/meetings?" ; "no_filters")]
    #[test_case("", "2025-10-15", "/api/meetings?date=2025-10-15&" ; "date_only")]
    #[test_case("team sync", "2025-10-15", "/api/meetings?search=team%20sync&date=2025-10-15&" ; "both_encoded")]
    #[test_case("a&b=c", "", "/api/meetings?search=a%26b%3Dc&" ; "reserved_chars")]
    fn test_meetings_url(search: &str, date: &str, expected: &str) {
        assert_eq!(meetings_url(&MeetingQuery::new(search, date)), expected);
    }

    #[test]
    fn test_meetings_url_pagination() {
        let query = MeetingQuery::new("x", "").with_page(2).with_per_page(25);
        assert_eq!(meetings_url(&query), "/api/meetings?search=x&page=2&per_page=25&");
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(get_meeting(MeetingId(4)).path, "/api/meetings/4");
        assert_eq!(delete_meeting(MeetingId(4)).method, HttpMethod::Delete);
        assert_eq!(list_notes(MeetingId(4)).path, "/api/notes?meeting_id=4");
        assert_eq!(delete_attendee(AttendeeId(8)).path, "/api/attendees/8");
        assert_eq!(logout().path, "/auth/api/logout");
        assert!(logout().body.is_none());
    }

    #[test]
    fn test_update_note_body() {
        let request = update_note(
            NoteId(5),
            &NoteChanges {
                content: "revised".into(),
            },
        );
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/api/notes/5");
        assert_eq!(request.body, Some(json!({"content": "revised"})));
    }
}
