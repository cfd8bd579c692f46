use serde::{Deserialize, Serialize};

use storehook_inventory::{SearchCriteria, StockItem, StockItemPage};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SearchStockItemsRequest {
    #[serde(alias = "searchCriteria")]
    pub search_criteria: SearchCriteria,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct StockItemListResponse {
    pub items: Vec<StockItem>,
    pub search_criteria: SearchCriteria,
    pub total_count: u64,
}

impl StockItemListResponse {
    pub fn new(page: StockItemPage, search_criteria: SearchCriteria) -> Self {
        Self {
            items: page.items,
            search_criteria,
            total_count: page.total_count,
        }
    }
}
