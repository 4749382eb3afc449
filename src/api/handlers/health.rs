//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Dataset loaded with at least one edition
/// - **503 Service Unavailable**: Dataset is empty
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "dataset": { "status": "ok", "message": "22 editions, 13 entities" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let dataset_check = check_dataset(&state);
    let healthy = dataset_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            dataset: dataset_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_dataset(state: &AppState) -> CheckStatus {
    let editions = state.query_service.editions().len();
    let entities = state.query_service.aggregates().len();

    if editions == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Dataset has no editions".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{editions} editions, {entities} entities")),
        }
    }
}
