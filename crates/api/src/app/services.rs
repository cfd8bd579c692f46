use std::sync::Arc;

use storehook_inventory::{InMemoryStockItemRepository, StockItemRepository, StockItems};
use storehook_webhooks::{CategoryWebhookObserver, HttpTransport, Publisher, WebhookSender};

use crate::config::{load_stock_items, AppConfig};

/// Services shared by all handlers.
pub struct AppServices {
    pub stock_items: StockItems<Arc<dyn StockItemRepository>>,
    pub category_observer: CategoryWebhookObserver<Arc<dyn Publisher>>,
}

impl AppServices {
    pub fn new(repository: Arc<dyn StockItemRepository>, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            stock_items: StockItems::new(repository),
            category_observer: CategoryWebhookObserver::new(publisher),
        }
    }
}

/// Production wiring: in-memory stock items (optionally seeded) + HTTP webhooks.
pub fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let repository = InMemoryStockItemRepository::new();
    if let Some(path) = &config.stock_items_path {
        let items = load_stock_items(path)?;
        tracing::info!(count = items.len(), path = %path.display(), "seeded stock items");
        for item in items {
            repository.upsert(item);
        }
    }

    if !config.webhook.active {
        tracing::info!("catalog webhooks are disabled");
    }

    let sender = WebhookSender::new(config.webhook.clone(), HttpTransport::new());

    Ok(AppServices::new(Arc::new(repository), Arc::new(sender)))
}
