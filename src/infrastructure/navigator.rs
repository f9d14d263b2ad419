//! Terminal stand-in for browser navigation.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tracing::info;

use crate::domain::ports::NavigatorPort;

/// Records redirects and tells the user where the web app would go next.
pub struct TerminalNavigator {
    base_url: String,
    visited: Mutex<Vec<String>>,
    navigated: Notify,
    echo: bool,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            visited: Mutex::new(Vec::new()),
            navigated: Notify::new(),
            echo: true,
        }
    }

    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    #[must_use]
    pub fn last_location(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }

    /// Waits for the next redirect, up to `timeout`.
    ///
    /// Returns the location, or `None` if nothing happened in time.
    pub async fn wait_for_navigation(&self, timeout: Duration) -> Option<String> {
        tokio::time::timeout(timeout, self.navigated.notified())
            .await
            .ok()
            .and_then(|()| self.last_location())
    }
}

impl NavigatorPort for TerminalNavigator {
    fn navigate(&self, location: &str) {
        let url = format!("{}{location}", self.base_url);
        info!(%url, "Navigating");
        if self.echo {
            eprintln!("Redirecting to {url}");
        }
        self.visited.lock().push(location.to_string());
        // notify_one keeps a permit if nobody is waiting yet
        self.navigated.notify_one();
    }
}
