use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto, errors, AppServices};

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SearchStockItemsRequest>,
) -> axum::response::Response {
    let page = match services.stock_items.get_list(&body.search_criteria) {
        Ok(page) => page,
        Err(e) => return errors::stock_items_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::StockItemListResponse::new(page, body.search_criteria)),
    )
        .into_response()
}
