use crate::domain::incident::{DateCount, Incident};
use crate::transport::http::types::{query_error_response, AppState};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}/incidents",
    params(
        ("vendor_id" = String, Path, description = "Vendor slug (e.g. vendor1)")
    ),
    responses(
        (status = 200, description = "All incidents for the vendor, newest date first", body = [Incident]),
        (status = 404, description = "Unknown vendor", body = ErrorBody),
        (status = 500, description = "Read or decode failure", body = ErrorBody)
    )
)]
pub async fn get_vendor_incidents_handler(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> impl IntoResponse {
    match state.query_service.incidents(&vendor_id).await {
        Ok(incidents) => Json::<Vec<Incident>>(incidents).into_response(),
        Err(e) => query_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}/incidents/by-date",
    params(
        ("vendor_id" = String, Path, description = "Vendor slug (e.g. vendor1)")
    ),
    responses(
        (status = 200, description = "Incident counts per date, oldest date first", body = [DateCount]),
        (status = 404, description = "Unknown vendor", body = ErrorBody),
        (status = 500, description = "Read or decode failure", body = ErrorBody)
    )
)]
pub async fn get_vendor_incidents_by_date_handler(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> impl IntoResponse {
    match state.query_service.date_counts(&vendor_id).await {
        Ok(counts) => Json::<Vec<DateCount>>(counts).into_response(),
        Err(e) => query_error_response(e).into_response(),
    }
}
