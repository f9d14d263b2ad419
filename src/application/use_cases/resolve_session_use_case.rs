//! Session resolution use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::SessionSource;
use crate::domain::entities::SessionCookie;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Resolved session with its source.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    /// The session cookie.
    pub session: SessionCookie,
    /// Source of the session.
    pub source: SessionSource,
}

impl ResolvedSession {
    /// Creates new resolved session.
    #[must_use]
    pub const fn new(session: SessionCookie, source: SessionSource) -> Self {
        Self { session, source }
    }
}

/// Picks the session cookie to send with requests.
pub struct ResolveSessionUseCase {
    storage_port: Arc<dyn SessionStoragePort>,
}

impl ResolveSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn SessionStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Resolves the session from CLI/Env or storage.
    ///
    /// Priority:
    /// 1. CLI/Env (passed as argument)
    /// 2. Session storage
    ///
    /// # Errors
    /// Returns error if storage access fails.
    pub async fn execute(
        &self,
        cli_session: Option<String>,
    ) -> Result<Option<ResolvedSession>, StorageError> {
        if let Some(raw) = cli_session.filter(|s| !s.trim().is_empty()) {
            if let Some(session) = SessionCookie::new(raw) {
                info!("Using session from command line / environment");
                return Ok(Some(ResolvedSession::new(
                    session,
                    SessionSource::CommandLine,
                )));
            }
            debug!("Command-line session is not a cookie header, ignoring");
        }

        debug!("Checking session storage");
        match self.storage_port.get_session().await? {
            Some(session) => {
                info!("Using stored session");
                Ok(Some(ResolvedSession::new(session, SessionSource::Stored)))
            }
            None => {
                debug!("No session found in any source");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStorage;

    fn stored() -> SessionCookie {
        SessionCookie::new("session=stored").unwrap()
    }

    #[tokio::test]
    async fn test_cli_priority() {
        let storage = Arc::new(MockSessionStorage::with_session(stored()));
        let use_case = ResolveSessionUseCase::new(storage);

        let result = use_case
            .execute(Some("session=from-cli".to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.source, SessionSource::CommandLine);
        assert_eq!(result.session.as_str(), "session=from-cli");
    }

    #[tokio::test]
    async fn test_storage_fallback() {
        let storage = Arc::new(MockSessionStorage::with_session(stored()));
        let use_case = ResolveSessionUseCase::new(storage);

        let result = use_case.execute(Some("  ".to_string())).await.unwrap().unwrap();

        assert_eq!(result.source, SessionSource::Stored);
    }

    #[tokio::test]
    async fn test_malformed_cli_value_falls_through() {
        let storage = Arc::new(MockSessionStorage::new());
        let use_case = ResolveSessionUseCase::new(storage);

        let result = use_case.execute(Some("garbage".to_string())).await.unwrap();

        assert!(result.is_none());
    }
}
