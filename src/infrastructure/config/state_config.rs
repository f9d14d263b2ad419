use serde::{Deserialize, Serialize};

/// Persisted client state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Cookie header of the last signed-in session.
    #[serde(default)]
    pub session: Option<String>,

    /// Username of the last sign-in.
    #[serde(default)]
    pub last_username: Option<String>,
}
