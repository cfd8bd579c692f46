use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use storehook_webhooks::{CategorySnapshot, LifecycleState};

use crate::app::AppServices;

/// Category saved or deleted on the platform side.
///
/// Always 202: webhook delivery problems are logged, never surfaced.
pub async fn category_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(category): Json<CategorySnapshot>,
) -> axum::response::Response {
    let state = LifecycleState::of(&category);
    services.category_observer.execute(&category).await;

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "id": category.id,
            "state": state,
        })),
    )
        .into_response()
}
