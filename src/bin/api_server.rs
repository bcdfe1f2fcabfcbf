// src/bin/api_server.rs

use axum::http::{header, Method};
use incident_dashboard::app::query_service::QueryService;
use incident_dashboard::infra::config;
use incident_dashboard::storage::StoreRegistry;
use incident_dashboard::transport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incident_dashboard=info,api_server=info".into()),
        )
        .init();

    // --- Store provisioning ---
    let data_dir = config::data_dir();
    info!(data_dir = %data_dir.display(), "provisioning vendor stores");
    let mut rng = StdRng::from_entropy();
    let registry = Arc::new(StoreRegistry::provision(&data_dir, &mut rng).await?);

    // --- Service initialization ---
    let query_service = Arc::new(QueryService::new(registry.clone()));
    let app_state = transport::http::AppState {
        query_service,
        registry: registry.clone(),
    };

    // --- API server initialization ---
    // Origin is mirrored rather than wildcarded so credentialed requests stay
    // allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .allow_credentials(true);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .fallback_service(ServeDir::new(config::static_dir()))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config::port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "API server listening");

    let registry_for_shutdown = registry.clone();
    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, closing stores");
            registry_for_shutdown.close_all().await;
            info!("graceful shutdown complete");
        }
    }

    Ok(())
}
