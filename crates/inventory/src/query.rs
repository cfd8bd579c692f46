//! Narrow stock lookup query produced by criteria translation.

use serde::Serialize;

/// Lookup of stock items by product identifiers, with offset pagination.
///
/// Built fresh per translation and immutable afterwards. `product_ids` is
/// never empty when produced by [`crate::criteria::translate`], and its order
/// is the order in which the ids were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockQuery {
    product_ids: Vec<String>,
    offset: u64,
    limit: u32,
}

impl StockQuery {
    pub(crate) fn new(product_ids: Vec<String>, offset: u64, limit: u32) -> Self {
        Self {
            product_ids,
            offset,
            limit,
        }
    }

    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether `product_id` is one of the requested ids (compared as text).
    pub fn matches_product(&self, product_id: u64) -> bool {
        let needle = product_id.to_string();
        self.product_ids.iter().any(|id| id.trim() == needle)
    }
}
