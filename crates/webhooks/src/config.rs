//! Webhook settings as read from the host configuration.

use std::sync::Arc;

use serde::Deserialize;

pub const ACTIVE_ENV: &str = "STOREHOOK_WEBHOOK_ACTIVE";
pub const TOKEN_ENV: &str = "STOREHOOK_WEBHOOK_TOKEN";

/// Read-only accessor for webhook configuration.
pub trait WebhookSettings: Send + Sync {
    fn is_webhook_active(&self) -> bool;

    /// Authorization token; empty when not configured.
    fn webhook_token(&self) -> String;
}

impl<S> WebhookSettings for Arc<S>
where
    S: WebhookSettings + ?Sized,
{
    fn is_webhook_active(&self) -> bool {
        (**self).is_webhook_active()
    }

    fn webhook_token(&self) -> String {
        (**self).webhook_token()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub token: String,
}

impl WebhookConfig {
    pub fn new(active: bool, token: impl Into<String>) -> Self {
        Self {
            active,
            token: token.into(),
        }
    }

    /// Load from `STOREHOOK_WEBHOOK_ACTIVE` / `STOREHOOK_WEBHOOK_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let active = lookup(ACTIVE_ENV).map(|v| parse_flag(&v)).unwrap_or(false);
        let token = lookup(TOKEN_ENV)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        Self { active, token }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl WebhookSettings for WebhookConfig {
    fn is_webhook_active(&self) -> bool {
        self.active
    }

    fn webhook_token(&self) -> String {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_disabled_without_token() {
        let config = WebhookConfig::from_lookup(lookup(&[]));
        assert_eq!(config, WebhookConfig::default());
        assert!(!config.is_webhook_active());
        assert!(config.webhook_token().is_empty());
    }

    #[test]
    fn reads_flag_and_token() {
        let config = WebhookConfig::from_lookup(lookup(&[
            (ACTIVE_ENV, " Yes "),
            (TOKEN_ENV, " abc123\n"),
        ]));
        assert!(config.is_webhook_active());
        assert_eq!(config.webhook_token(), "abc123");
    }

    #[test]
    fn unknown_flag_values_disable() {
        let config = WebhookConfig::from_lookup(lookup(&[(ACTIVE_ENV, "enabled")]));
        assert!(!config.is_webhook_active());
    }
}
