//! Session storage adapters.

use std::sync::Arc;

use crate::domain::ports::SessionStoragePort;
use crate::infrastructure::config::{SessionStorageKind, StorageManager};

mod file_storage;
#[cfg(feature = "keyring")]
mod keyring_storage;

pub use file_storage::FileSessionStorage;
#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringSessionStorage;

/// Builds the session store named in the configuration.
///
/// Falls back to the state file when the keyring backend is not compiled in.
#[must_use]
pub fn session_storage(
    kind: SessionStorageKind,
    storage: &StorageManager,
) -> Arc<dyn SessionStoragePort> {
    match kind {
        SessionStorageKind::File => Arc::new(FileSessionStorage::new(storage.clone())),
        #[cfg(feature = "keyring")]
        SessionStorageKind::Keyring => Arc::new(KeyringSessionStorage::new()),
        #[cfg(not(feature = "keyring"))]
        SessionStorageKind::Keyring => {
            tracing::warn!("Keyring session storage requested but the keyring feature is disabled, using state file");
            Arc::new(FileSessionStorage::new(storage.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SessionCookie;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_kind_uses_state_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let storage = session_storage(SessionStorageKind::File, &manager);

        storage
            .store_session(&SessionCookie::new("session=abc").unwrap())
            .await
            .unwrap();

        assert_eq!(manager.load_state().unwrap().session.as_deref(), Some("session=abc"));
    }
}
