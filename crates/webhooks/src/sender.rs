//! Webhook delivery: gate on settings, serialize, log, post once.
//!
//! ```text
//! send(topic, data)
//!   ├─ webhooks disabled         → return (silent)
//!   ├─ token empty               → error log, return
//!   └─ deliver()
//!        ├─ serde_json::to_string(data)
//!        ├─ info log (topic + payload)
//!        ├─ resolve endpoint (scheme-default port)
//!        └─ transport.post(request)   // one attempt, status not inspected
//!   any deliver() error          → error log with details, swallowed
//! ```

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, error, info};

use crate::config::WebhookSettings;
use crate::endpoint::{WebhookEndpoint, WEBHOOK_URL};
use crate::error::WebhookError;
use crate::publisher::Publisher;
use crate::transport::{WebhookRequest, WebhookTransport};

pub struct WebhookSender<C, T> {
    settings: C,
    transport: T,
    target: String,
}

impl<C, T> WebhookSender<C, T>
where
    C: WebhookSettings,
    T: WebhookTransport,
{
    /// Sender delivering to [`WEBHOOK_URL`].
    pub fn new(settings: C, transport: T) -> Self {
        Self {
            settings,
            transport,
            target: WEBHOOK_URL.to_string(),
        }
    }

    /// Redirect deliveries to a local listener.
    #[cfg(any(test, feature = "test-util"))]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver `data` under `topic`. Never fails; problems are logged.
    pub async fn send<D>(&self, topic: &str, data: &D)
    where
        D: Serialize + Sync + ?Sized,
    {
        let Some(token) = self.authorized_token() else {
            return;
        };

        if let Err(e) = self.deliver(topic, data, &token).await {
            error!(
                topic,
                error = %e,
                details = ?e.details(),
                "webhook delivery failed"
            );
        }
    }

    fn authorized_token(&self) -> Option<String> {
        if !self.settings.is_webhook_active() {
            return None;
        }

        let token = self.settings.webhook_token();
        if token.is_empty() {
            error!("Authentication token has not been set up for webhooks");
            return None;
        }

        Some(token)
    }

    async fn deliver<D>(&self, topic: &str, data: &D, token: &str) -> Result<(), WebhookError>
    where
        D: Serialize + Sync + ?Sized,
    {
        let payload = serde_json::to_string(data)?;
        info!(topic, payload = %payload, "sending the webhook");

        let endpoint = WebhookEndpoint::parse(&self.target)?;
        let request = WebhookRequest::post(&endpoint, topic, token, payload);

        let status = self.transport.post(request).await?;
        debug!(topic, status, "webhook posted");
        Ok(())
    }
}

#[async_trait]
impl<C, T> Publisher for WebhookSender<C, T>
where
    C: WebhookSettings,
    T: WebhookTransport,
{
    async fn publish(&self, topic: &str, data: &JsonValue) {
        self.send(topic, data).await
    }
}
