use crate::transport::http::types::{AppState, ErrorBody};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "All vendor stores reachable"),
        (status = 503, description = "At least one vendor store unreachable", body = ErrorBody)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.registry.is_healthy().await {
        (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok" })),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody {
                error: "Database error".to_string(),
            }),
        )
            .into_response()
    }
}
