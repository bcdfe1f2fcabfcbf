use crate::domain::incident::{DateCount, Incident};
use crate::domain::vendor::Vendor;
use crate::transport::http::handlers::{health, incidents, vendors};
use crate::transport::http::types::ErrorBody;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        vendors::get_vendors_handler,
        incidents::get_vendor_incidents_handler,
        incidents::get_vendor_incidents_by_date_handler
    ),
    components(schemas(Vendor, Incident, DateCount, ErrorBody))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/vendors", get(vendors::get_vendors_handler))
        .route(
            "/api/vendors/:vendor_id/incidents",
            get(incidents::get_vendor_incidents_handler),
        )
        .route(
            "/api/vendors/:vendor_id/incidents/by-date",
            get(incidents::get_vendor_incidents_by_date_handler),
        )
        .with_state(app_state)
}
