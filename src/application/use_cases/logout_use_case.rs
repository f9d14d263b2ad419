//! Logout use case implementation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::services::endpoints;
use crate::application::services::FlashNotifier;
use crate::domain::ports::{HttpPort, NavigatorPort, SchedulerPort};

/// Delay between the logout confirmation and the move to the login page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Ends the server session and sends the user back to the login page.
#[derive(Clone)]
pub struct LogoutUseCase {
    http: Arc<dyn HttpPort>,
    notifier: FlashNotifier,
    scheduler: Arc<dyn SchedulerPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl LogoutUseCase {
    /// Creates new logout use case.
    #[must_use]
    pub fn new(
        http: Arc<dyn HttpPort>,
        notifier: FlashNotifier,
        scheduler: Arc<dyn SchedulerPort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            http,
            notifier,
            scheduler,
            navigator,
        }
    }

    /// Sends one logout request. Concurrent calls each send their own.
    ///
    /// Returns whether the server accepted the logout; only then is the
    /// redirect scheduled.
    pub async fn execute(&self) -> bool {
        match self.http.request(endpoints::logout()).await {
            Ok(response) if response.is_ok() => {
                info!("Logged out");
                self.notifier.success("Logged out successfully!");
                let navigator = Arc::clone(&self.navigator);
                self.scheduler.schedule(
                    REDIRECT_DELAY,
                    Box::new(move || navigator.navigate(endpoints::LOGIN_PAGE)),
                );
                true
            }
            Ok(response) => {
                warn!(status = response.status, "Logout rejected by server");
                self.notifier.danger("Logout failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Logout request failed");
                self.notifier.danger("An error occurred during logout");
                false
            }
        }
    }
}
