//! Stock item read path.
//!
//! Translates the platform's generic search criteria into a narrow
//! lookup-by-product-ids query and runs it against a [`StockItemRepository`].

pub mod criteria;
pub mod item;
pub mod query;
pub mod repository;
pub mod service;

pub use criteria::{
    translate, CriteriaError, Filter, FilterGroup, SearchCriteria, DEFAULT_PAGE_SIZE,
    PRODUCT_ID_FIELD,
};
pub use item::{StockItem, StockItemPage};
pub use query::StockQuery;
pub use repository::{InMemoryStockItemRepository, RepositoryError, StockItemRepository};
pub use service::{StockItems, StockItemsError};
