use crate::domain::vendor::Vendor;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/vendors",
    responses(
        (status = 200, description = "The static vendor list, in declaration order", body = [Vendor])
    )
)]
pub async fn get_vendors_handler(State(state): State<AppState>) -> Json<Vec<Vendor>> {
    Json(state.query_service.list_vendors())
}
