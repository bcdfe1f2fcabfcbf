use crate::app::query_service::{QueryError, QueryService};
use crate::storage::StoreRegistry;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<QueryService>,
    pub registry: Arc<StoreRegistry>,
}

/// Error body shared by every non-200 API response: `{"error": "..."}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a query failure to its wire response.
///
/// Internal detail (the sqlx/serde message) goes to the log, not the client;
/// the body carries only the stable error strings.
pub fn query_error_response(err: QueryError) -> (StatusCode, Json<ErrorBody>) {
    let (status, message) = match &err {
        QueryError::UnknownVendor => (StatusCode::NOT_FOUND, "Vendor not found"),
        QueryError::Database(e) => {
            error!(error = %e, "incident query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
        QueryError::Decode(e) => {
            error!(error = %e, "incident row decode failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Data parsing error")
        }
    };
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}
