use super::app_config::LogLevel;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::services::date_format;

#[derive(Debug, Parser)]
#[command(
    name = "meetnote",
    version,
    about = "A lightweight terminal client for the Meeting Notes service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Root URL of the Meeting Notes service.
    #[arg(long, env = "MEETNOTE_SERVER", value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Session cookie header to send instead of the stored session.
    #[arg(long, env = "MEETNOTE_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,

    /// Disable coloured flash messages.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Mirror flash messages as desktop notifications.
    #[arg(long, global = true)]
    pub desktop_notifications: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage meetings.
    #[command(subcommand)]
    Meetings(MeetingCommand),
    /// Manage notes.
    #[command(subcommand)]
    Notes(NoteCommand),
    /// Manage attendees.
    #[command(subcommand)]
    Attendees(AttendeeCommand),
    /// Sign in and keep the session.
    Login {
        username: String,
        #[arg(long, env = "MEETNOTE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Do not store the session for later runs.
        #[arg(long)]
        no_save: bool,
    },
    /// Create an account and sign in.
    Register {
        username: String,
        email: String,
        #[arg(long, env = "MEETNOTE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session.
    Logout,
    /// Show the signed-in account.
    Whoami,
}

#[derive(Debug, Subcommand)]
pub enum MeetingCommand {
    /// List meetings, newest first.
    List {
        /// Match titles containing this text.
        #[arg(long, default_value = "")]
        search: String,
        /// Only meetings on this day (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show one meeting with its notes and attendees.
    Show { id: i64 },
    /// Create a meeting.
    Create(MeetingFields),
    /// Change fields of a meeting.
    Update {
        id: i64,
        #[command(flatten)]
        fields: MeetingUpdateFields,
    },
    /// Delete a meeting.
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct MeetingFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Start time, e.g. 2025-10-15T09:00 (server time if omitted).
    #[arg(long, value_parser = parse_date_time)]
    pub date: Option<NaiveDateTime>,
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Debug, Args)]
pub struct MeetingUpdateFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_parser = parse_date_time)]
    pub date: Option<NaiveDateTime>,
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List the notes of a meeting.
    List { meeting_id: i64 },
    /// Add a note to a meeting.
    Add { meeting_id: i64, content: String },
    /// Replace the content of a note.
    Edit { id: i64, content: String },
    /// Delete a note.
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum AttendeeCommand {
    /// List the attendees of a meeting.
    List { meeting_id: i64 },
    /// Add an attendee to a meeting.
    Add {
        meeting_id: i64,
        name: String,
        email: String,
    },
    /// Change an attendee's name or email.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove an attendee.
    Remove { id: i64 },
}

fn parse_date_time(value: &str) -> Result<NaiveDateTime, String> {
    date_format::parse_local(value)
        .ok_or_else(|| format!("'{value}' is not a date (expected e.g. 2025-10-15T09:00)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meeting_create() {
        let args = CliArgs::parse_from([
            "meetnote",
            "meetings",
            "create",
            "--title",
            "Standup",
            "--date",
            "2025-10-15T09:00",
        ]);

        let Command::Meetings(MeetingCommand::Create(fields)) = args.command else {
            panic!("expected meetings create");
        };
        assert_eq!(fields.title, "Standup");
        assert_eq!(
            fields.date.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2025-10-15 09:00"
        );
    }

    #[test]
    fn test_rejects_bad_date() {
        let result = CliArgs::try_parse_from([
            "meetnote", "meetings", "create", "--title", "x", "--date", "soon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_defaults_to_no_filters() {
        let args = CliArgs::parse_from(["meetnote", "meetings", "list"]);
        let Command::Meetings(MeetingCommand::List { search, date, page, .. }) = args.command
        else {
            panic!("expected meetings list");
        };
        assert!(search.is_empty());
        assert!(date.is_empty());
        assert!(page.is_none());
    }
}
