//! Handlers for entity (country) lookups.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::entity::{EntityHistoryResponse, EntityListResponse, EntitySummary};
use crate::state::AppState;

/// Lists every country that reached at least one final.
///
/// # Endpoint
///
/// `GET /api/entities`
pub async fn entity_list_handler(State(state): State<AppState>) -> Json<EntityListResponse> {
    let items: Vec<EntitySummary> = state
        .query_service
        .known_entities()
        .into_iter()
        .map(EntitySummary::from)
        .collect();

    Json(EntityListResponse {
        total: items.len(),
        items,
    })
}

/// Returns the country panel for a canonical id.
///
/// # Endpoint
///
/// `GET /api/entities/{canonical_id}/history`
///
/// Editions played under a historical name are included. An id that never
/// reached a final returns zero counts and empty lists; use
/// `GET /api/entities` to tell unknown ids apart.
pub async fn entity_history_handler(
    State(state): State<AppState>,
    Path(canonical_id): Path<String>,
) -> Json<EntityHistoryResponse> {
    Json(state.query_service.entity_history(&canonical_id).into())
}
