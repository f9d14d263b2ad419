mod auth_dto;
mod resource_dto;

pub use auth_dto::{LoginRequest, LoginResponse, RegisterRequest, SessionSource};
pub use resource_dto::{
    AttendeeChanges, MeetingChanges, MeetingDraft, MeetingQuery, NewAttendee, NewNote, NoteChanges,
};
