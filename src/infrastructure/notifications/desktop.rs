//! Desktop notifications with conditional compilation.

/// Desktop notification service.
#[cfg(feature = "notify")]
mod notify_impl {
    use notify_rust::{Notification, Timeout};

    use crate::domain::notification::{FlashId, FlashMessage};
    use crate::domain::ports::NotificationSink;

    /// Matches the in-terminal dismissal delay.
    const POPUP_TIMEOUT_MS: u32 = 5000;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        #[must_use]
        pub fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    impl NotificationSink for DesktopNotificationService {
        fn append(&self, message: &FlashMessage) {
            if !self.enabled {
                return;
            }

            let summary = format!("Meeting Notes: {}", message.category);
            let body = message.message.clone();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&summary)
                    .body(&body)
                    .appname("meetnote")
                    .timeout(Timeout::Milliseconds(POPUP_TIMEOUT_MS))
                    .show()
                {
                    tracing::warn!("Failed to show notification: {}", e);
                }
            });
        }

        // The desktop server expires the popup on its own timeout.
        fn remove(&self, _id: FlashId) {}
    }
}

/// Stub notification service when notify feature is disabled.
#[cfg(not(feature = "notify"))]
mod stub_impl {
    use crate::domain::notification::{FlashId, FlashMessage};
    use crate::domain::ports::NotificationSink;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        _enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            if enabled {
                tracing::warn!("Desktop notifications requested but the notify feature is disabled");
            }
            Self { _enabled: false }
        }

        #[must_use]
        pub fn is_enabled(&self) -> bool {
            false
        }
    }

    impl NotificationSink for DesktopNotificationService {
        fn append(&self, _message: &FlashMessage) {}

        fn remove(&self, _id: FlashId) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;
