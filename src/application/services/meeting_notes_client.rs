//! Helpers wrapping every Meeting Notes endpoint.
//!
//! Each helper sends exactly one request. On success it returns the decoded
//! payload and, for mutations, shows a success flash. On any failure it logs
//! the error, shows a danger flash, and returns `None`; callers that need to
//! tell a network failure from a server rejection use [`MeetingNotesClient::send`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::endpoints;
use super::flash_notifier::FlashNotifier;
use crate::application::dto::{
    AttendeeChanges, MeetingChanges, MeetingDraft, MeetingQuery, NewAttendee, NewNote, NoteChanges,
};
use crate::domain::entities::{
    Attendee, AttendeeId, AttendeeList, Confirmation, CurrentUser, Meeting, MeetingId,
    MeetingPage, Note, NoteId, NoteList, User,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{HttpPort, HttpRequest, HttpResponse};

/// User-facing wording for one helper.
#[derive(Debug, Clone, Copy)]
struct Feedback {
    /// Log context, e.g. "creating meeting".
    action: &'static str,
    /// Shown after success; reads are silent.
    success: Option<&'static str>,
    /// Shown when the server gives no reason, or always for reads.
    failure: &'static str,
    /// Whether a server-supplied `error` replaces `failure`.
    prefer_server_error: bool,
}

impl Feedback {
    const fn read(action: &'static str, failure: &'static str) -> Self {
        Self {
            action,
            success: None,
            failure,
            prefer_server_error: false,
        }
    }

    const fn write(action: &'static str, success: &'static str, failure: &'static str) -> Self {
        Self {
            action,
            success: Some(success),
            failure,
            prefer_server_error: true,
        }
    }

    fn failure_message(&self, err: &ApiError) -> String {
        match err.server_message() {
            Some(message) if self.prefer_server_error => message.to_string(),
            _ => self.failure.to_string(),
        }
    }
}

/// Decodes a response into `T`, turning non-2xx statuses into [`ApiError::Status`].
///
/// # Errors
/// Returns `Status` for non-2xx responses and `Decode` when a 2xx body is
/// missing or does not match `T`.
pub fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_ok() {
        let message = response.error_field().map(str::to_string);
        return Err(ApiError::status(response.status, message));
    }

    let body = response
        .body
        .ok_or_else(|| ApiError::decode("response body was not JSON"))?;
    serde_json::from_value(body).map_err(|e| ApiError::decode(e.to_string()))
}

/// Client-side helpers for meetings, notes, and attendees.
#[derive(Clone)]
pub struct MeetingNotesClient {
    http: Arc<dyn HttpPort>,
    notifier: FlashNotifier,
}

impl MeetingNotesClient {
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>, notifier: FlashNotifier) -> Self {
        Self { http, notifier }
    }

    #[must_use]
    pub const fn notifier(&self) -> &FlashNotifier {
        &self.notifier
    }

    /// Sends a request and decodes the payload without any user feedback.
    ///
    /// # Errors
    /// Returns `Network` when no response arrived, `Status` for non-2xx
    /// responses, and `Decode` when a 2xx body does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        debug!(method = %request.method, path = %request.path, "Sending request");
        let response = self.http.request(request).await?;
        decode_response(response)
    }

    /// A 2xx reply whose body does not decode as `T` counts as a failure,
    /// even for mutations the server has already applied.
    async fn perform<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        feedback: Feedback,
    ) -> Option<T> {
        match self.send(request).await {
            Ok(value) => {
                if let Some(message) = feedback.success {
                    self.notifier.success(message);
                }
                Some(value)
            }
            Err(e) => {
                error!(error = %e, transport = e.is_transport(), "Error {}", feedback.action);
                self.notifier.danger(feedback.failure_message(&e));
                None
            }
        }
    }

    /// Lists meetings matching the filters.
    pub async fn fetch_meetings(&self, query: &MeetingQuery) -> Option<MeetingPage> {
        self.perform(
            endpoints::list_meetings(query),
            Feedback::read("fetching meetings", "Failed to load meetings"),
        )
        .await
    }

    /// Loads one meeting with its notes and attendees.
    pub async fn fetch_meeting(&self, id: MeetingId) -> Option<Meeting> {
        self.perform(
            endpoints::get_meeting(id),
            Feedback::read("fetching meeting", "Failed to load meeting"),
        )
        .await
    }

    pub async fn create_meeting(&self, draft: &MeetingDraft) -> Option<Meeting> {
        self.perform(
            endpoints::create_meeting(draft),
            Feedback::write(
                "creating meeting",
                "Meeting created successfully!",
                "Failed to create meeting",
            ),
        )
        .await
    }

    pub async fn update_meeting(&self, id: MeetingId, changes: &MeetingChanges) -> Option<Meeting> {
        self.perform(
            endpoints::update_meeting(id, changes),
            Feedback::write(
                "updating meeting",
                "Meeting updated successfully!",
                "Failed to update meeting",
            ),
        )
        .await
    }

    pub async fn delete_meeting(&self, id: MeetingId) -> Option<Confirmation> {
        self.perform(
            endpoints::delete_meeting(id),
            Feedback::write(
                "deleting meeting",
                "Meeting deleted successfully!",
                "Failed to delete meeting",
            ),
        )
        .await
    }

    pub async fn fetch_notes(&self, meeting_id: MeetingId) -> Option<Vec<Note>> {
        self.perform::<NoteList>(
            endpoints::list_notes(meeting_id),
            Feedback::read("fetching notes", "Failed to load notes"),
        )
        .await
        .map(|list| list.notes)
    }

    pub async fn create_note(&self, meeting_id: MeetingId, content: impl Into<String>) -> Option<Note> {
        let note = NewNote {
            meeting_id,
            content: content.into(),
        };
        self.perform(
            endpoints::create_note(&note),
            Feedback::write(
                "creating note",
                "Note added successfully!",
                "Failed to create note",
            ),
        )
        .await
    }

    pub async fn update_note(&self, id: NoteId, content: impl Into<String>) -> Option<Note> {
        let changes = NoteChanges {
            content: content.into(),
        };
        self.perform(
            endpoints::update_note(id, &changes),
            Feedback::write(
                "updating note",
                "Note updated successfully!",
                "Failed to update note",
            ),
        )
        .await
    }

    pub async fn delete_note(&self, id: NoteId) -> Option<Confirmation> {
        self.perform(
            endpoints::delete_note(id),
            Feedback::write(
                "deleting note",
                "Note deleted successfully!",
                "Failed to delete note",
            ),
        )
        .await
    }

    pub async fn fetch_attendees(&self, meeting_id: MeetingId) -> Option<Vec<Attendee>> {
        self.perform::<AttendeeList>(
            endpoints::list_attendees(meeting_id),
            Feedback::read("fetching attendees", "Failed to load attendees"),
        )
        .await
        .map(|list| list.attendees)
    }

    pub async fn create_attendee(
        &self,
        meeting_id: MeetingId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Option<Attendee> {
        let attendee = NewAttendee {
            meeting_id,
            name: name.into(),
            email: email.into(),
        };
        self.perform(
            endpoints::create_attendee(&attendee),
            Feedback::write(
                "adding attendee",
                "Attendee added successfully!",
                "Failed to add attendee",
            ),
        )
        .await
    }

    pub async fn update_attendee(
        &self,
        id: AttendeeId,
        changes: &AttendeeChanges,
    ) -> Option<Attendee> {
        self.perform(
            endpoints::update_attendee(id, changes),
            Feedback::write(
                "updating attendee",
                "Attendee updated successfully!",
                "Failed to update attendee",
            ),
        )
        .await
    }

    pub async fn delete_attendee(&self, id: AttendeeId) -> Option<Confirmation> {
        self.perform(
            endpoints::delete_attendee(id),
            Feedback::write(
                "removing attendee",
                "Attendee removed successfully!",
                "Failed to remove attendee",
            ),
        )
        .await
    }

    /// Returns the signed-in account; the outer `None` means the request failed.
    pub async fn current_user(&self) -> Option<Option<User>> {
        self.perform::<CurrentUser>(
            endpoints::current_user(),
            Feedback::read("fetching current user", "Failed to load current user"),
        )
        .await
        .map(|current| current.user)
    }
}
