//! Keyring-based session storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::SessionCookie;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

const KEYRING_SERVICE: &str = "meetnote";
const KEYRING_USER: &str = "session";

/// System keyring session storage adapter.
pub struct KeyringSessionStorage {
    service: String,
    user: String,
}

impl KeyringSessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(KEYRING_SERVICE, KEYRING_USER)
    }

    /// Creates storage under a custom service and account, one per server.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, StorageError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoragePort for KeyringSessionStorage {
    async fn get_session(&self) -> Result<Option<SessionCookie>, StorageError> {
        debug!(service = %self.service, "Retrieving session from keyring");

        match self.entry()?.get_password() {
            Ok(value) => Ok(SessionCookie::new(value)),
            Err(keyring::Error::NoEntry) => {
                debug!("No session stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve session from keyring");
                Err(StorageError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn store_session(&self, session: &SessionCookie) -> Result<(), StorageError> {
        debug!(service = %self.service, "Storing session in keyring");

        self.entry()?.set_password(session.as_str()).map_err(|e| {
            warn!(error = %e, "Failed to store session in keyring");
            StorageError::StorageFailed(e.to_string())
        })
    }

    async fn delete_session(&self) -> Result<(), StorageError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to delete session from keyring");
                Err(StorageError::DeletionFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_session() {
        let storage = KeyringSessionStorage::with_names("meetnote-test", "test-session");
        let session = SessionCookie::new("session=eyJfZnJlc2giOmZhbHNlfQ.abc").unwrap();

        storage.store_session(&session).await.unwrap();

        let retrieved = storage.get_session().await.unwrap();
        assert_eq!(retrieved.unwrap().as_str(), session.as_str());

        storage.delete_session().await.unwrap();
        assert!(storage.get_session().await.unwrap().is_none());
    }
}
