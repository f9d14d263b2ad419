use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Visual category of a flash message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlashCategory {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl FlashCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlashCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" | "warn" => Ok(Self::Warning),
            "danger" | "error" => Ok(Self::Danger),
            other => Err(format!("unknown flash category: {other}")),
        }
    }
}

/// Handle used to take a flash message back out of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashId(Uuid);

impl FlashId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlashId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: FlashId,
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    #[must_use]
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            id: FlashId::new(),
            category,
            message: message.into(),
        }
    }
}
