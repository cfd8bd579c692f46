//! Outbound request shape and the HTTP transport that delivers it.

use async_trait::async_trait;

use crate::endpoint::WebhookEndpoint;
use crate::error::WebhookError;

/// Header carrying the event topic. Receivers route on it.
pub const TOPIC_HEADER: &str = "Magento-Webhook-Topic";

/// A fully-built webhook POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl WebhookRequest {
    pub fn post(endpoint: &WebhookEndpoint, topic: &str, token: &str, payload: String) -> Self {
        Self {
            url: endpoint.url(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Content-Length".to_string(), payload.len().to_string()),
                ("Authorization".to_string(), token.to_string()),
                (TOPIC_HEADER.to_string(), topic.to_string()),
            ],
            body: payload,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs exactly one delivery attempt and reports the HTTP status.
///
/// A non-success status is not an error; only failing to complete the
/// exchange is.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post(&self, request: WebhookRequest) -> Result<u16, WebhookError>;
}

/// HTTP/1.1 transport backed by a short-lived `reqwest` client.
///
/// A new client with pooling disabled is built per delivery, so the
/// connection is closed once the call returns, whatever the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post(&self, request: WebhookRequest) -> Result<u16, WebhookError> {
        let client = reqwest::Client::builder()
            .http1_only()
            .pool_max_idle_per_host(0)
            .build()?;

        let mut req_builder = client.post(&request.url).version(reqwest::Version::HTTP_11);
        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        let response = req_builder.body(request.body).send().await?;
        Ok(response.status().as_u16())
    }
}
