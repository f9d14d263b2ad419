//! Navigation port definition.

/// Port standing in for the browser location.
#[cfg_attr(test, mockall::automock)]
pub trait NavigatorPort: Send + Sync {
    /// Moves the user to `location`, a path relative to the service root.
    fn navigate(&self, location: &str);
}
