use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storehook_core::DomainError;
use storehook_inventory::StockItemsError;

pub fn stock_items_error_to_response(err: StockItemsError) -> axum::response::Response {
    match err.as_domain() {
        Some(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        None => {
            tracing::error!(error = %err, "stock item lookup failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "repository_error",
                err.to_string(),
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
