use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Fire-and-forget notification sink used by lifecycle observers.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, topic: &str, data: &JsonValue);
}

#[async_trait]
impl<P> Publisher for Arc<P>
where
    P: Publisher + ?Sized,
{
    async fn publish(&self, topic: &str, data: &JsonValue) {
        (**self).publish(topic, data).await
    }
}
