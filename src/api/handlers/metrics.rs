//! Handler for the metric catalog.

use axum::Json;

use crate::api::dto::metric::MetricInfo;
use crate::domain::entities::Metric;

/// Lists the metrics available for the map selector.
///
/// # Endpoint
///
/// `GET /api/metrics`
pub async fn metric_list_handler() -> Json<Vec<MetricInfo>> {
    Json(Metric::ALL.into_iter().map(MetricInfo::from).collect())
}
