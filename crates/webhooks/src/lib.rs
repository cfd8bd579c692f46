//! Outbound webhook notifications for catalog lifecycle changes.
//!
//! - [`lifecycle`]: lifecycle state of an observed entity and topic naming
//! - [`config`]: read-only webhook settings (enabled flag + auth token)
//! - [`endpoint`]: the fixed delivery endpoint and host/port resolution
//! - [`transport`]: outbound request shape and the HTTP transport
//! - [`sender`]: gate, serialize, log, deliver once, swallow failures
//! - [`observer`]: entry point invoked on category save/delete

pub mod config;
pub mod endpoint;
pub mod error;
pub mod lifecycle;
pub mod observer;
pub mod publisher;
pub mod sender;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{WebhookConfig, WebhookSettings};
pub use endpoint::{WebhookEndpoint, WEBHOOK_URL};
pub use error::WebhookError;
pub use lifecycle::{build_topic, LifecycleEntity, LifecycleState};
pub use observer::{CategorySnapshot, CategoryWebhookObserver, CATEGORY_EVENT_PREFIX};
pub use publisher::Publisher;
pub use sender::WebhookSender;
pub use transport::{HttpTransport, WebhookRequest, WebhookTransport, TOPIC_HEADER};
