//! API error types.

use thiserror::Error;

/// Failure of a single request against the Meeting Notes API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {message}")]
    Network { message: String },

    /// A response arrived but its body could not be understood.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// The server answered with a non-success status.
    #[error("server returned {status}{}", detail_suffix(.message))]
    Status { status: u16, message: Option<String> },
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates status error with the server-supplied message, if any.
    #[must_use]
    pub const fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Returns whether the failure happened before a usable response existed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Decode { .. })
    }

    /// Returns the message the server attached to an error response.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Returns the HTTP status for server errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::network("refused").is_transport());
        assert!(ApiError::decode("eof").is_transport());
        assert!(!ApiError::status(500, None).is_transport());
    }

    #[test]
    fn test_server_message_ignores_empty() {
        assert_eq!(
            ApiError::status(400, Some("Title is required".into())).server_message(),
            Some("Title is required")
        );
        assert_eq!(ApiError::status(400, Some(String::new())).server_message(), None);
        assert_eq!(ApiError::network("down").server_message(), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            ApiError::status(403, Some("Unauthorized".into())).to_string(),
            "server returned 403: Unauthorized"
        );
        assert_eq!(ApiError::status(502, None).to_string(), "server returned 502");
    }
}
