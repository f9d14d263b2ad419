//! Session storage in `state.toml`.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::SessionCookie;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;
use crate::infrastructure::config::StorageManager;

/// Keeps the session cookie in the client state file.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    storage: StorageManager,
}

impl FileSessionStorage {
    #[must_use]
    pub const fn new(storage: StorageManager) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn get_session(&self) -> Result<Option<SessionCookie>, StorageError> {
        let state = self
            .storage
            .load_state()
            .map_err(|e| StorageError::RetrievalFailed(e.to_string()))?;
        let session = state.session.and_then(SessionCookie::new);
        debug!(found = session.is_some(), "Read session from state file");
        Ok(session)
    }

    async fn store_session(&self, session: &SessionCookie) -> Result<(), StorageError> {
        let value = session.as_str().to_string();
        self.storage
            .update_state(|state| state.session = Some(value))
            .map_err(|e| StorageError::StorageFailed(e.to_string()))?;
        debug!(path = %self.storage.state_path().display(), "Session written to state file");
        Ok(())
    }

    async fn delete_session(&self) -> Result<(), StorageError> {
        self.storage
            .update_state(|state| state.session = None)
            .map_err(|e| StorageError::DeletionFailed(e.to_string()))
    }
}
