//! HTTP server setup and middleware.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderValue;
use axum::{BoxError, Router};
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{self, ApiError};
use crate::config::{AppConfig, CorsConfig};
use crate::logging::OpTimer;
use crate::{log_banner, log_init_step, log_init_warning, log_success, AppState};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create the application with an empty in-memory store.
pub fn create_app(config: AppConfig) -> anyhow::Result<Router> {
    let overall_timer = OpTimer::new("server", "create_app");

    log_banner!(
        format!("📚 Edu Admin API v{VERSION}"),
        format!("Listening address: {}", config.server.socket_addr())
    );

    let state = AppState::new(config);
    log_init_step!(1, 3, "Store", "🗄️  In-memory (not persisted)");
    log_init_step!(2, 3, "Chat", format!("💬 {} responder", state.responder.name()));

    let app = build_router(state)?;
    log_init_step!(3, 3, "Router", "🌐 Routes + middleware configured");

    overall_timer.finish();
    log_success!("Edu Admin API server created successfully");
    Ok(app)
}

/// Assemble routes and middleware around an existing state.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let timer = OpTimer::new("server", "router");
    let cors = timer.finish_with(cors_layer(&state.config.cors))?;
    let timeout = Duration::from_secs(state.config.server.timeout_secs);

    Ok(api::create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(middleware_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(cors),
        )
        .with_state(state))
}

/// Turn middleware failures into the usual `{message}` error body.
async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(anyhow::anyhow!("middleware error: {err}"))
    }
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.is_empty() {
        log_init_warning!("No CORS origins configured, allowing any origin");
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
