//! Handler for the map aggregate.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::aggregate::{AggregateItem, AggregateQueryParams, AggregateResponse};
use crate::domain::entities::Metric;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-country values of the selected metric for map coloring.
///
/// # Endpoint
///
/// `GET /api/aggregate`
///
/// # Query Parameters
///
/// - `metric` (optional): `primary_count`, `secondary_count` or `total_count`
///   (default: `primary_count`)
///
/// # Response
///
/// ```json
/// {
///   "metric": "total_count",
///   "label": "Total Finals Appearances",
///   "items": [ { "entity": "Germany", "code": "DEU", "value": 8 } ]
/// }
/// ```
///
/// Countries without a geographic code are not listed.
///
/// # Errors
///
/// Returns 400 Bad Request with code `invalid_metric` for an unknown metric.
pub async fn aggregate_handler(
    State(state): State<AppState>,
    Query(params): Query<AggregateQueryParams>,
) -> Result<Json<AggregateResponse>, AppError> {
    let metric: Metric = match params.metric.as_deref() {
        Some(name) => name.parse()?,
        None => Metric::default(),
    };

    let items = state
        .query_service
        .aggregate_view_for(metric)
        .into_iter()
        .map(AggregateItem::from)
        .collect();

    Ok(Json(AggregateResponse {
        metric: metric.as_str().to_string(),
        label: metric.label().to_string(),
        items,
    }))
}
