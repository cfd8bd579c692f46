//! Category save/delete observer.

use serde::{Deserialize, Serialize};
use serde_json::json;

use storehook_core::Entity;

use crate::lifecycle::{build_topic, LifecycleEntity, LifecycleState};
use crate::publisher::Publisher;

pub const CATEGORY_EVENT_PREFIX: &str = "catalog_category";

/// Category as seen by the observer at save/delete time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub id: i64,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Entity for CategorySnapshot {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl LifecycleEntity for CategorySnapshot {
    fn is_object_new(&self) -> bool {
        self.is_new
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn event_prefix(&self) -> &str {
        CATEGORY_EVENT_PREFIX
    }
}

/// Publishes `{"id": <entity id>}` under `<prefix>_<create|update|delete>`.
#[derive(Debug, Clone)]
pub struct CategoryWebhookObserver<P> {
    publisher: P,
}

impl<P> CategoryWebhookObserver<P>
where
    P: Publisher,
{
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    #[cfg(test)]
    fn publisher(&self) -> &P {
        &self.publisher
    }

    pub async fn execute<E>(&self, entity: &E)
    where
        E: LifecycleEntity + Sync + ?Sized,
    {
        let state = LifecycleState::of(entity);
        let topic = build_topic(entity.event_prefix(), state);
        self.publisher.publish(&topic, &json!({ "id": *entity.id() })).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value as JsonValue;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::WebhookConfig;
    use crate::sender::WebhookSender;
    use crate::transport::{HttpTransport, TOPIC_HEADER};

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<(String, JsonValue)>>,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        async fn publish(&self, topic: &str, data: &JsonValue) {
            self.published.lock().unwrap().push((topic.to_string(), data.clone()));
        }
    }

    fn category(id: i64, is_new: bool, is_deleted: bool) -> CategorySnapshot {
        CategorySnapshot { id, is_new, is_deleted }
    }

    #[tokio::test]
    async fn publishes_topic_for_each_state() {
        let observer = CategoryWebhookObserver::new(RecordingPublisher::default());

        observer.execute(&category(1, true, false)).await;
        observer.execute(&category(2, false, false)).await;
        observer.execute(&category(3, false, true)).await;
        observer.execute(&category(4, true, true)).await;

        let published = observer.publisher().published.lock().unwrap().clone();
        assert_eq!(
            published,
            vec![
                ("catalog_category_create".to_string(), json!({"id": 1})),
                ("catalog_category_update".to_string(), json!({"id": 2})),
                ("catalog_category_delete".to_string(), json!({"id": 3})),
                ("catalog_category_delete".to_string(), json!({"id": 4})),
            ]
        );
    }

    #[tokio::test]
    async fn new_category_is_delivered_end_to_end() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ecommerce/magento/webhook"))
            .and(header(TOPIC_HEADER, "catalog_category_create"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"id": 42})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sender = WebhookSender::new(WebhookConfig::new(true, "secret-token"), HttpTransport::new())
            .with_target(format!("{}/ecommerce/magento/webhook", mock_server.uri()));
        let observer = CategoryWebhookObserver::new(sender);

        observer.execute(&category(42, true, false)).await;
    }

    #[test]
    fn snapshot_deserializes_with_default_flags() {
        let snapshot: CategorySnapshot = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(snapshot, category(9, false, false));
        assert_eq!(LifecycleState::of(&snapshot), LifecycleState::Updated);
    }
}
