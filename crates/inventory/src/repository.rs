//! Stock item lookup abstraction and an in-memory implementation for tests/dev.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::item::{StockItem, StockItemPage};
use crate::query::StockQuery;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Internal lock poisoning.
    #[error("stock item store is unavailable")]
    Poisoned,

    #[error("stock item backend failed: {0}")]
    Backend(String),
}

/// Executes stock queries against whatever store holds stock items.
pub trait StockItemRepository: Send + Sync {
    fn get_list(&self, query: &StockQuery) -> Result<StockItemPage, RepositoryError>;
}

impl<R> StockItemRepository for Arc<R>
where
    R: StockItemRepository + ?Sized,
{
    fn get_list(&self, query: &StockQuery) -> Result<StockItemPage, RepositoryError> {
        (**self).get_list(query)
    }
}

/// In-memory stock item store keyed by `item_id`.
///
/// Results are ordered by `item_id`; `total_count` counts matches before
/// offset/limit are applied.
#[derive(Debug, Default)]
pub struct InMemoryStockItemRepository {
    inner: RwLock<BTreeMap<u64, StockItem>>,
}

impl InMemoryStockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = StockItem>) -> Self {
        let repo = Self::new();
        for item in items {
            repo.upsert(item);
        }
        repo
    }

    pub fn upsert(&self, item: StockItem) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(item.item_id, item);
        }
    }
}

impl StockItemRepository for InMemoryStockItemRepository {
    fn get_list(&self, query: &StockQuery) -> Result<StockItemPage, RepositoryError> {
        let map = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;

        let matching: Vec<&StockItem> = map
            .values()
            .filter(|item| query.matches_product(item.product_id))
            .collect();

        let total_count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(query.limit() as usize)
            .cloned()
            .collect();

        Ok(StockItemPage { items, total_count })
    }
}
