use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock record for a single product in a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub item_id: u64,
    pub product_id: u64,
    #[serde(default = "default_stock_id")]
    pub stock_id: u32,
    pub qty: f64,
    pub is_in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_date: Option<DateTime<Utc>>,
}

fn default_stock_id() -> u32 {
    1
}

/// One page of stock items plus the number of records matching the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockItemPage {
    pub items: Vec<StockItem>,
    pub total_count: u64,
}

impl StockItemPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
