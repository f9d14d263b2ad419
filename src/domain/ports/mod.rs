mod http_port;
mod navigator_port;
mod notification_port;
mod scheduler_port;
mod session_storage_port;

pub use http_port::{HttpMethod, HttpPort, HttpRequest, HttpResponse};
pub use navigator_port::NavigatorPort;
pub use notification_port::NotificationSink;
pub use scheduler_port::{ScheduledTask, SchedulerPort};
pub use session_storage_port::SessionStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::http_port::mock::MockHttpPort;
    pub use super::navigator_port::MockNavigatorPort;
    pub use super::notification_port::mock::MockNotificationSink;
    pub use super::scheduler_port::mock::ManualScheduler;
    pub use super::session_storage_port::mock::MockSessionStorage;
}
