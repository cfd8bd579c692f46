use thiserror::Error;

/// Failures on the delivery path. None of these ever leave [`crate::WebhookSender::send`].
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("failed to serialize webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid webhook endpoint: {0}")]
    Endpoint(String),

    #[error("webhook transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WebhookError {
    /// Source chain below this error, outermost first.
    pub fn details(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        chain
    }
}
