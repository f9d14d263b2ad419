//! Domain entity definitions.

mod attendee;
mod confirmation;
mod ids;
mod meeting;
mod note;
mod session;
mod user;

pub use attendee::{Attendee, AttendeeList};
pub use confirmation::Confirmation;
pub use ids::{AttendeeId, MeetingId, NoteId, UserId};
pub use meeting::{Meeting, MeetingPage};
pub use note::{Note, NoteList};
pub use session::SessionCookie;
pub use user::{AuthResponse, CurrentUser, User};
