//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::SessionCookie;
use crate::domain::errors::StorageError;

/// Port for session persistence operations.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Retrieves stored session.
    async fn get_session(&self) -> Result<Option<SessionCookie>, StorageError>;

    /// Stores session.
    async fn store_session(&self, session: &SessionCookie) -> Result<(), StorageError>;

    /// Deletes stored session.
    async fn delete_session(&self) -> Result<(), StorageError>;

    /// Checks if a session exists.
    async fn has_session(&self) -> Result<bool, StorageError> {
        Ok(self.get_session().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock session storage for testing.
    pub struct MockSessionStorage {
        session: Arc<RwLock<Option<SessionCookie>>>,
    }

    impl MockSessionStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                session: Arc::new(RwLock::new(None)),
            }
        }

        /// Creates mock storage with a session.
        pub fn with_session(session: SessionCookie) -> Self {
            Self {
                session: Arc::new(RwLock::new(Some(session))),
            }
        }
    }

    impl Default for MockSessionStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStoragePort for MockSessionStorage {
        async fn get_session(&self) -> Result<Option<SessionCookie>, StorageError> {
            Ok(self.session.read().await.clone())
        }

        async fn store_session(&self, session: &SessionCookie) -> Result<(), StorageError> {
            *self.session.write().await = Some(session.clone());
            Ok(())
        }

        async fn delete_session(&self) -> Result<(), StorageError> {
            *self.session.write().await = None;
            Ok(())
        }
    }
}
