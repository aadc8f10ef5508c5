//! HTTP routing configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::AppState;
use crate::config::{AppConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS};

use super::dispatch::dispatch;
use super::handlers::{
    handle_account, handle_account_by_id, handle_transfer, health_check_handler,
    liveness_handler, metrics_handler, readiness_handler,
};

/// Transport limits applied to every route.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl From<&AppConfig> for RouterConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            request_timeout: config.request_timeout,
            max_body_bytes: config.max_body_bytes,
        }
    }
}

/// Create router with default transport limits
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_router_with_config(app_state, &RouterConfig::default())
}

/// Create router with explicit transport limits
pub fn create_router_with_config(app_state: Arc<AppState>, config: &RouterConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ));

    // Method selection happens inside the handlers
    let account_routes = Router::new()
        .route("/account", dispatch(handle_account))
        .route("/account/{id}", dispatch(handle_account_by_id))
        .route("/transfer/", dispatch(handle_transfer));

    let health_routes = Router::new()
        .route("/", get(health_check_handler))
        .route("/live", get(liveness_handler))
        .route("/ready", get(readiness_handler));

    let mut router = account_routes.nest("/health", health_routes);
    if app_state.metrics.is_some() {
        router = router.route("/metrics", get(metrics_handler));
    }

    router.layer(middleware).with_state(app_state)
}
