//! Maps CLI commands onto client helpers.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::output;
use crate::application::dto::{
    AttendeeChanges, LoginRequest, MeetingChanges, MeetingDraft, MeetingQuery, RegisterRequest,
};
use crate::application::services::MeetingNotesClient;
use crate::application::use_cases::{LoginUseCase, LogoutUseCase, REDIRECT_DELAY};
use crate::domain::entities::{AttendeeId, MeetingId, NoteId};
use crate::infrastructure::TerminalNavigator;
use crate::infrastructure::config::{
    AttendeeCommand, Command, MeetingCommand, MeetingFields, MeetingUpdateFields, NoteCommand,
    StorageManager,
};

const REDIRECT_GRACE: Duration = Duration::from_millis(500);

/// Result of one command: whether it succeeded and what to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub output: Option<String>,
}

impl Outcome {
    fn printed(output: String) -> Self {
        Self {
            success: true,
            output: Some(output),
        }
    }

    const fn silent(success: bool) -> Self {
        Self {
            success,
            output: None,
        }
    }

    fn from_option<T>(value: Option<T>, render: impl FnOnce(T) -> String) -> Self {
        value.map_or(Self::silent(false), |v| Self::printed(render(v)))
    }
}

/// Runs one parsed command against the service.
pub struct CommandRunner {
    client: MeetingNotesClient,
    login: LoginUseCase,
    logout: LogoutUseCase,
    navigator: Arc<TerminalNavigator>,
    storage: StorageManager,
}

impl CommandRunner {
    #[must_use]
    pub fn new(
        client: MeetingNotesClient,
        login: LoginUseCase,
        logout: LogoutUseCase,
        navigator: Arc<TerminalNavigator>,
        storage: StorageManager,
    ) -> Self {
        Self {
            client,
            login,
            logout,
            navigator,
            storage,
        }
    }

    /// Dispatches the command and prints its output to stdout.
    pub async fn run(&self, command: Command) -> bool {
        let outcome = self.dispatch(command).await;
        if let Some(output) = &outcome.output {
            println!("{output}");
        }
        outcome.success
    }

    pub async fn dispatch(&self, command: Command) -> Outcome {
        match command {
            Command::Meetings(command) => self.meetings(command).await,
            Command::Notes(command) => self.notes(command).await,
            Command::Attendees(command) => self.attendees(command).await,
            Command::Login {
                username,
                password,
                no_save,
            } => {
                let mut request = LoginRequest::new(&username, password);
                if no_save {
                    request = request.without_persistence();
                }
                let response = self.login.execute(request).await;
                if response.is_some() {
                    self.remember_username(&username);
                }
                Outcome::from_option(response, |r| {
                    let saved = if r.session_persisted {
                        "session saved"
                    } else {
                        "session not saved"
                    };
                    format!("Signed in as {} ({saved})", output::user_summary(&r.user))
                })
            }
            Command::Register {
                username,
                email,
                password,
            } => {
                let response = self
                    .login
                    .register(RegisterRequest::new(&username, email, password))
                    .await;
                if response.is_some() {
                    self.remember_username(&username);
                }
                Outcome::from_option(response, |r| {
                    format!("Registered {}", output::user_summary(&r.user))
                })
            }
            Command::Logout => self.logout().await,
            Command::Whoami => Outcome::from_option(self.client.current_user().await, |user| {
                user.map_or_else(|| "Not signed in".to_string(), |u| output::user_summary(&u))
            }),
        }
    }

    async fn meetings(&self, command: MeetingCommand) -> Outcome {
        match command {
            MeetingCommand::List {
                search,
                date,
                page,
                per_page,
            } => {
                let mut query = MeetingQuery::new(search, date);
                if let Some(page) = page {
                    query = query.with_page(page);
                }
                if let Some(per_page) = per_page {
                    query = query.with_per_page(per_page);
                }
                Outcome::from_option(self.client.fetch_meetings(&query).await, |page| {
                    output::meeting_page(&page)
                })
            }
            MeetingCommand::Show { id } => Outcome::from_option(
                self.client.fetch_meeting(MeetingId::from(id)).await,
                |meeting| output::meeting_detail(&meeting),
            ),
            MeetingCommand::Create(fields) => Outcome::from_option(
                self.client.create_meeting(&draft_from(fields)).await,
                |meeting| output::meeting_row(&meeting),
            ),
            MeetingCommand::Update { id, fields } => {
                let changes = changes_from(fields);
                if changes.is_empty() {
                    self.client.notifier().warning("Nothing to update");
                    return Outcome::silent(false);
                }
                Outcome::from_option(
                    self.client
                        .update_meeting(MeetingId::from(id), &changes)
                        .await,
                    |meeting| output::meeting_row(&meeting),
                )
            }
            MeetingCommand::Delete { id } => Outcome::silent(
                self.client
                    .delete_meeting(MeetingId::from(id))
                    .await
                    .is_some(),
            ),
        }
    }

    async fn notes(&self, command: NoteCommand) -> Outcome {
        match command {
            NoteCommand::List { meeting_id } => Outcome::from_option(
                self.client.fetch_notes(MeetingId::from(meeting_id)).await,
                |notes| {
                    if notes.is_empty() {
                        return "No notes yet.".to_string();
                    }
                    notes
                        .iter()
                        .map(output::note_block)
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            ),
            NoteCommand::Add {
                meeting_id,
                content,
            } => Outcome::from_option(
                self.client
                    .create_note(MeetingId::from(meeting_id), content)
                    .await,
                |note| output::note_block(&note),
            ),
            NoteCommand::Edit { id, content } => Outcome::from_option(
                self.client.update_note(NoteId::from(id), content).await,
                |note| output::note_block(&note),
            ),
            NoteCommand::Delete { id } => {
                Outcome::silent(self.client.delete_note(NoteId::from(id)).await.is_some())
            }
        }
    }

    async fn attendees(&self, command: AttendeeCommand) -> Outcome {
        match command {
            AttendeeCommand::List { meeting_id } => Outcome::from_option(
                self.client
                    .fetch_attendees(MeetingId::from(meeting_id))
                    .await,
                |attendees| {
                    if attendees.is_empty() {
                        return "No attendees yet.".to_string();
                    }
                    attendees
                        .iter()
                        .map(output::attendee_row)
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            ),
            AttendeeCommand::Add {
                meeting_id,
                name,
                email,
            } => Outcome::from_option(
                self.client
                    .create_attendee(MeetingId::from(meeting_id), name, email)
                    .await,
                |attendee| output::attendee_row(&attendee),
            ),
            AttendeeCommand::Edit { id, name, email } => {
                let changes = AttendeeChanges { name, email };
                Outcome::from_option(
                    self.client
                        .update_attendee(AttendeeId::from(id), &changes)
                        .await,
                    |attendee| output::attendee_row(&attendee),
                )
            }
            AttendeeCommand::Remove { id } => Outcome::silent(
                self.client
                    .delete_attendee(AttendeeId::from(id))
                    .await
                    .is_some(),
            ),
        }
    }

    async fn logout(&self) -> Outcome {
        if !self.logout.execute().await {
            return Outcome::silent(false);
        }

        if let Err(e) = self.login.forget_session().await {
            warn!(error = %e, "Stored session could not be removed");
        }

        match self
            .navigator
            .wait_for_navigation(REDIRECT_DELAY + REDIRECT_GRACE)
            .await
        {
            Some(location) => debug!(%location, "Redirect completed"),
            None => warn!("Redirect did not happen in time"),
        }
        Outcome::silent(true)
    }

    fn remember_username(&self, username: &str) {
        let username = username.to_string();
        if let Err(e) = self
            .storage
            .update_state(|state| state.last_username = Some(username))
        {
            warn!(error = %e, "Failed to record last username");
        }
    }
}

fn draft_from(fields: MeetingFields) -> MeetingDraft {
    MeetingDraft {
        title: fields.title,
        description: fields.description,
        date: fields.date,
        location: fields.location,
    }
}

fn changes_from(fields: MeetingUpdateFields) -> MeetingChanges {
    MeetingChanges {
        title: fields.title,
        description: fields.description,
        date: fields.date,
        location: fields.location,
    }
}
