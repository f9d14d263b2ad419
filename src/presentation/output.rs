//! Plain-text rendering of service payloads.

use std::fmt::Write;

use crate::application::services::date_format::{render_date, render_date_time};
use crate::domain::entities::{Attendee, Meeting, MeetingPage, Note, User};

const NO_VALUE: &str = "-";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NO_VALUE)
}

#[must_use]
pub fn meeting_row(meeting: &Meeting) -> String {
    let when = meeting
        .date
        .as_ref()
        .map_or_else(|| NO_VALUE.to_string(), render_date_time);
    format!(
        "#{:<5} {}  |  {}  |  {}",
        meeting.id,
        meeting.title,
        when,
        or_dash(meeting.location.as_deref())
    )
}

#[must_use]
pub fn meeting_page(page: &MeetingPage) -> String {
    if page.meetings.is_empty() {
        return "No meetings found.".to_string();
    }

    let mut out = String::new();
    for meeting in &page.meetings {
        let _ = writeln!(out, "{}", meeting_row(meeting));
    }
    let _ = write!(
        out,
        "Page {} of {} ({} meetings)",
        page.page,
        page.pages.max(1),
        page.total
    );
    out
}

/// Full view of one meeting, including embedded notes and attendees.
#[must_use]
pub fn meeting_detail(meeting: &Meeting) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", meeting.title, meeting.id);
    if let Some(date) = &meeting.date {
        let _ = writeln!(out, "When:     {}", render_date_time(date));
    }
    let _ = writeln!(out, "Where:    {}", or_dash(meeting.location.as_deref()));
    if let Some(creator) = meeting.creator_username.as_deref() {
        let _ = writeln!(out, "Created by {creator}");
    }
    if let Some(description) = meeting.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "\n{description}");
    }

    if let Some(attendees) = &meeting.attendees {
        let _ = writeln!(out, "\nAttendees ({}):", attendees.len());
        for attendee in attendees {
            let _ = writeln!(out, "  {}", attendee_row(attendee));
        }
    }
    if let Some(notes) = &meeting.notes {
        let _ = writeln!(out, "\nNotes ({}):", notes.len());
        for note in notes {
            let _ = writeln!(out, "{}", note_block(note));
        }
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn note_block(note: &Note) -> String {
    let stamp = note
        .updated_at
        .or(note.created_at)
        .as_ref()
        .map_or_else(|| NO_VALUE.to_string(), render_date_time);
    let body = note
        .content
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("  [{}] {stamp}\n{body}", note.id)
}

#[must_use]
pub fn attendee_row(attendee: &Attendee) -> String {
    format!("#{:<5} {} <{}>", attendee.id, attendee.name, attendee.email)
}

#[must_use]
pub fn user_summary(user: &User) -> String {
    match &user.created_at {
        Some(joined) => format!(
            "{} <{}> (member since {})",
            user.username,
            user.email,
            render_date(joined)
        ),
        None => format!("{} <{}>", user.username, user.email),
    }
}
