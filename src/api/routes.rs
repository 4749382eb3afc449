//! API route configuration.

use crate::api::handlers::{
    aggregate_handler, edition_detail_handler, edition_list_handler, entity_history_handler,
    entity_list_handler, metric_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only dashboard query routes.
///
/// # Endpoints
///
/// - `GET /aggregate?metric=...`           - Per-country metric values for the map
/// - `GET /metrics`                        - Available map metrics
/// - `GET /editions`                       - Edition keys and the default edition
/// - `GET /editions/{edition_key}`         - Year panel
/// - `GET /entities`                       - Countries that reached a final
/// - `GET /entities/{canonical_id}/history` - Country panel
pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/aggregate", get(aggregate_handler))
        .route("/metrics", get(metric_list_handler))
        .route("/editions", get(edition_list_handler))
        .route("/editions/{edition_key}", get(edition_detail_handler))
        .route("/entities", get(entity_list_handler))
        .route(
            "/entities/{canonical_id}/history",
            get(entity_history_handler),
        )
}
