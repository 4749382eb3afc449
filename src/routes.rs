//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (dataset loaded)
//! - `/api/*`      - Dashboard queries (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::RateLimitConfig;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - `None` disables rate limiting; with `behind_proxy` set the
///   client IP is read from `X-Forwarded-For` / `X-Real-IP` instead of the
///   peer socket address
pub fn app_router(state: AppState, rate_limit: Option<RateLimitConfig>) -> NormalizePath<Router> {
    let api_router = api::routes::query_routes();

    let api_router = match rate_limit {
        Some(limit) if limit.behind_proxy => api_router.layer(rate_limit::proxy_layer(
            limit.requests_per_second,
            limit.burst,
        )),
        Some(limit) => {
            api_router.layer(rate_limit::layer(limit.requests_per_second, limit.burst))
        }
        None => api_router,
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
