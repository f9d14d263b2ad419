//! Login and registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::application::services::endpoints;
use crate::application::services::meeting_notes_client::decode_response;
use crate::application::services::FlashNotifier;
use crate::domain::entities::{AuthResponse, SessionCookie};
use crate::domain::errors::ApiError;
use crate::domain::ports::{HttpPort, HttpRequest, SessionStoragePort};

/// Handles the sign-in workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    http: Arc<dyn HttpPort>,
    storage_port: Arc<dyn SessionStoragePort>,
    notifier: FlashNotifier,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub fn new(
        http: Arc<dyn HttpPort>,
        storage_port: Arc<dyn SessionStoragePort>,
        notifier: FlashNotifier,
    ) -> Self {
        Self {
            http,
            storage_port,
            notifier,
        }
    }

    /// Signs in and stores the issued session.
    ///
    /// Returns `None` after showing a danger flash when the server refuses.
    pub async fn execute(&self, request: LoginRequest) -> Option<LoginResponse> {
        debug!(username = %request.username, "Attempting login");
        let http_request = endpoints::login(&request);
        self.authenticate(http_request, request.persist_session, "Login failed")
            .await
    }

    /// Creates an account; the server signs it in straight away.
    pub async fn register(&self, request: RegisterRequest) -> Option<LoginResponse> {
        debug!(username = %request.username, "Registering account");
        self.authenticate(endpoints::register(&request), true, "Registration failed")
            .await
    }

    async fn authenticate(
        &self,
        request: HttpRequest,
        persist: bool,
        failure: &'static str,
    ) -> Option<LoginResponse> {
        let outcome = match self.http.request(request).await {
            Ok(response) => {
                let session = SessionCookie::from_pairs(&response.cookies);
                decode_response::<AuthResponse>(response).map(|body| (body, session))
            }
            Err(e) => Err(e),
        };

        let (body, session) = match outcome {
            Ok(ok) => ok,
            Err(e) => {
                warn!(error = %e, "Authentication failed");
                self.notifier.danger(failure_text(&e, failure));
                return None;
            }
        };

        info!(user_id = %body.user.id, username = %body.user.username, "Signed in");

        let session_persisted = match (persist, session) {
            (true, Some(session)) => match self.storage_port.store_session(&session).await {
                Ok(()) => {
                    info!("Session persisted");
                    true
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist session");
                    false
                }
            },
            (true, None) => {
                warn!("Server did not issue a session cookie");
                false
            }
            (false, _) => {
                debug!("Session persistence disabled, skipping storage");
                false
            }
        };

        self.notifier
            .success(body.message.as_deref().unwrap_or("Login successful"));
        Some(LoginResponse::new(body.user, session_persisted))
    }

    /// Forgets the stored session.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn forget_session(&self) -> Result<(), crate::domain::errors::StorageError> {
        debug!("Deleting stored session");
        match self.storage_port.delete_session().await {
            Ok(()) => {
                info!("Stored session deleted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete stored session");
                Err(e)
            }
        }
    }
}

fn failure_text(err: &ApiError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::FlashCategory;
    use crate::domain::ports::mocks::{
        ManualScheduler, MockHttpPort, MockNotificationSink, MockSessionStorage,
    };
    use crate::domain::ports::HttpResponse;
    use serde_json::json;

    fn user_body(message: &str) -> serde_json::Value {
        json!({
            "message": message,
            "user": {"id": 1, "username": "ada", "email": "ada@example.com", "created_at": "2025-01-01T00:00:00"}
        })
    }

    fn setup(
        http: MockHttpPort,
    ) -> (LoginUseCase, Arc<MockSessionStorage>, Arc<MockNotificationSink>) {
        let storage = Arc::new(MockSessionStorage::new());
        let sink = Arc::new(MockNotificationSink::new());
        let notifier = FlashNotifier::new(sink.clone(), Arc::new(ManualScheduler::new()));
        let use_case = LoginUseCase::new(Arc::new(http), storage.clone(), notifier);
        (use_case, storage, sink)
    }

    #[tokio::test]
    async fn test_successful_login_stores_session() {
        let response = HttpResponse::new(200, Some(user_body("Login successful")))
            .with_cookies(vec!["session=abc123".into(), "remember_token=1|zz".into()]);
        let (use_case, storage, sink) = setup(MockHttpPort::new().respond_with(response));

        let result = use_case
            .execute(LoginRequest::new("ada", "secret"))
            .await
            .unwrap();

        assert_eq!(result.user.username, "ada");
        assert!(result.session_persisted);
        let stored = storage.get_session().await.unwrap().unwrap();
        assert_eq!(stored.as_str(), "session=abc123; remember_token=1|zz");
        assert_eq!(
            sink.last(),
            Some((FlashCategory::Success, "Login successful".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_error() {
        let (use_case, storage, sink) = setup(
            MockHttpPort::new().respond(401, json!({"error": "Invalid username or password"})),
        );

        let result = use_case.execute(LoginRequest::new("ada", "wrong")).await;

        assert!(result.is_none());
        assert!(!storage.has_session().await.unwrap());
        assert_eq!(
            sink.last(),
            Some((
                FlashCategory::Danger,
                "Invalid username or password".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_rejected_login_without_reason_uses_fallback() {
        let (use_case, storage, sink) = setup(MockHttpPort::new().respond(500, json!({})));

        let result = use_case.execute(LoginRequest::new("ada", "secret")).await;

        assert!(result.is_none());
        assert!(!storage.has_session().await.unwrap());
        assert_eq!(
            sink.history(),
            vec![(FlashCategory::Danger, "Login failed".to_string())]
        );
    }

    #[tokio::test]
    async fn test_login_without_persistence() {
        let response = HttpResponse::new(200, Some(user_body("Login successful")))
            .with_cookies(vec!["session=abc123".into()]);
        let (use_case, storage, _) = setup(MockHttpPort::new().respond_with(response));

        let result = use_case
            .execute(LoginRequest::new("ada", "secret").without_persistence())
            .await
            .unwrap();

        assert!(!result.session_persisted);
        assert!(!storage.has_session().await.unwrap());
    }

    #[tokio::test]
    async fn test_register_network_failure_uses_fallback() {
        let (use_case, _, sink) = setup(MockHttpPort::new().fail(ApiError::network("refused")));

        let result = use_case
            .register(RegisterRequest::new("ada", "ada@example.com", "secret"))
            .await;

        assert!(result.is_none());
        assert_eq!(
            sink.last(),
            Some((FlashCategory::Danger, "Registration failed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_forget_session() {
        let storage = Arc::new(MockSessionStorage::with_session(
            SessionCookie::new("session=abc").unwrap(),
        ));
        let notifier = FlashNotifier::new(
            Arc::new(MockNotificationSink::new()),
            Arc::new(ManualScheduler::new()),
        );
        let use_case = LoginUseCase::new(Arc::new(MockHttpPort::new()), storage.clone(), notifier);

        use_case.forget_session().await.unwrap();
        assert!(!storage.has_session().await.unwrap());
    }
}
