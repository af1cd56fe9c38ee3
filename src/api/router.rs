use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, security_headers_middleware, MAX_BODY_SIZE,
};
use super::state::AppState;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// API-only router: health probes and the v1 endpoints
pub fn create_router_with_state(state: AppState) -> Router {
    with_middleware(api_routes(state))
}

/// Full application: API, the form page under `/ui`, and optional `/metrics`
pub fn create_app_router(
    state: AppState,
    static_dir: &Path,
    metrics: Option<PrometheusMetrics>,
) -> Router {
    let ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let mut router = api_routes(state)
        .nest_service("/ui", ui)
        .route("/", get(|| async { Redirect::permanent("/ui/") }));

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    with_middleware(router)
}
