//! Handlers for edition (year) lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::edition::{EditionDetailResponse, EditionListResponse};
use crate::domain::entities::EditionKey;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all editions for the year selector.
///
/// # Endpoint
///
/// `GET /api/editions`
///
/// `default` is the latest edition, `null` for an empty dataset.
pub async fn edition_list_handler(State(state): State<AppState>) -> Json<EditionListResponse> {
    Json(EditionListResponse {
        default: state.query_service.default_edition(),
        items: state.query_service.editions(),
    })
}

/// Returns the year panel for one edition.
///
/// # Endpoint
///
/// `GET /api/editions/{edition_key}`
///
/// Entity names are shown as they were at the time (e.g. "West Germany" in 1974).
///
/// # Errors
///
/// Returns 400 Bad Request if `edition_key` is not a number.
/// Returns 404 Not Found if the edition does not exist.
pub async fn edition_detail_handler(
    State(state): State<AppState>,
    Path(edition_key): Path<String>,
) -> Result<Json<EditionDetailResponse>, AppError> {
    let edition_key: EditionKey = edition_key.parse().map_err(|_| {
        AppError::bad_request(
            "Edition key must be a year",
            json!({ "edition_key": edition_key }),
        )
    })?;

    let detail = state.query_service.edition_detail(edition_key)?;

    Ok(Json(detail.into()))
}
