//! Acknowledgement payload.

use serde::{Deserialize, Serialize};

/// Plain `{message}` acknowledgement returned by deletes and logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default)]
    pub message: String,
}
