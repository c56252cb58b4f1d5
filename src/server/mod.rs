//! HTTP server for cost prediction
//!
//! Exposes the prediction endpoint plus a health check.

mod error;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::model::RegressionModel;

pub use error::{ApiError, ErrorDetail, ErrorResponse};
pub use handlers::{AppState, PredictResponse};
pub use routes::api_routes;

/// Build the application router with CORS and logging layers applied
///
/// Split out from [`start`] so tests can drive the router directly with
/// a stub model.
pub fn app(model: Arc<RegressionModel>, config: &ServerConfig) -> Result<Router> {
    let state = Arc::new(AppState::new(model));

    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid allowed origin: {}", config.allowed_origin))?;

    // A single allowed origin with credentials. The wildcard forms are
    // incompatible with credentials, so methods and headers mirror the
    // preflight request instead.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let mut router = api_routes().layer(cors);
    if config.request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    Ok(router.with_state(state))
}

/// Start the HTTP prediction server
pub async fn start(model: Arc<RegressionModel>, config: ServerConfig) -> Result<()> {
    let router = app(model, &config)?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  POST /predict - Cost prediction");
    tracing::info!("Allowed origin: {}", config.allowed_origin);

    axum::serve(listener, router).await?;

    Ok(())
}
