use axum::{routing::post, Router};

pub mod categories;
pub mod stock_items;
pub mod system;

/// Routes that need [`crate::app::AppServices`] in an `Extension`.
pub fn router() -> Router {
    Router::new()
        .route("/stock-items/search", post(stock_items::search))
        .route("/catalog/categories/events", post(categories::category_event))
}
