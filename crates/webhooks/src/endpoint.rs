//! Fixed webhook destination and host/port resolution.

use url::Url;

use crate::error::WebhookError;

/// Where every webhook is delivered. Not configurable.
pub const WEBHOOK_URL: &str = "https://app.grin.co/ecommerce/magento/webhook";

/// Resolved delivery target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoint {
    scheme: String,
    host: String,
    port: u16,
    path: String,
}

impl WebhookEndpoint {
    /// Resolve host and port from `raw`.
    ///
    /// Without an explicit port, https resolves to 443 and every other scheme to 80.
    pub fn parse(raw: &str) -> Result<Self, WebhookError> {
        let url = Url::parse(raw).map_err(|e| WebhookError::Endpoint(format!("{raw}: {e}")))?;
        let host = url
            .host_str()
            .ok_or_else(|| WebhookError::Endpoint(format!("{raw}: missing host")))?
            .to_string();
        let default_port = if url.scheme() == "https" { 443 } else { 80 };

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port().unwrap_or(default_port),
            path: url.path().to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL with the resolved port spelled out.
    pub fn url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }
}
