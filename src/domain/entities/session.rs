//! Session cookie value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cookie header value identifying a signed-in session.
///
/// Holds `name=value` pairs joined with `"; "`, ready to be sent as `Cookie`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionCookie {
    value: String,
}

impl SessionCookie {
    /// Creates a session from a raw cookie header, rejecting blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() || !value.contains('=') {
            return None;
        }
        Some(Self { value })
    }

    /// Builds a session from `name=value` pairs taken out of `Set-Cookie` headers.
    ///
    /// Later pairs replace earlier ones with the same name.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut jar: Vec<(String, String)> = Vec::new();
        for pair in pairs {
            let Some((name, value)) = pair.as_ref().split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim().to_string();
            match jar.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = value,
                None => jar.push((name.to_string(), value)),
            }
        }

        let header = jar
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(header)
    }

    /// Returns the cookie header value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked value for display.
    #[must_use]
    pub fn masked(&self) -> String {
        self.value
            .split("; ")
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) if value.chars().count() > 8 => {
                    let head: String = value.chars().take(4).collect();
                    let tail: String = value.chars().skip(value.chars().count() - 4).collect();
                    format!("{name}={head}...{tail}")
                }
                Some((name, value)) => format!("{name}={}", "*".repeat(value.chars().count())),
                None => "*".repeat(pair.len()),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "eyJfZnJlc2giOmZhbHNlfQ.ZxYwVQ.abcdef";

    #[test]
    fn test_rejects_blank_or_pairless() {
        assert!(SessionCookie::new("   ").is_none());
        assert!(SessionCookie::new("justtext").is_none());
        assert!(SessionCookie::new("session=abc").is_some());
    }

    #[test]
    fn test_from_pairs_joins_and_dedupes() {
        let cookie =
            SessionCookie::from_pairs(["session=old", "remember_token=1|xyz", "session=new"])
                .unwrap();
        assert_eq!(cookie.as_str(), "session=new; remember_token=1|xyz");
    }

    #[test]
    fn test_from_pairs_empty() {
        assert!(SessionCookie::from_pairs(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_debug_does_not_leak_session() {
        let cookie = SessionCookie::new(format!("session={SECRET}")).unwrap();
        let debug_output = format!("{cookie:?}");
        assert!(!debug_output.contains(SECRET));
        assert!(cookie.to_string().starts_with("session=eyJf..."));
    }
}
