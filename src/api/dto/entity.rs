//! DTOs for entity (country) endpoints.

use serde::Serialize;

use crate::domain::entities::EditionKey;
use crate::domain::views::{EntityHistory, KnownEntity};

/// Country panel.
#[derive(Debug, Serialize)]
pub struct EntityHistoryResponse {
    pub canonical_id: String,
    pub primary_count: u32,
    pub secondary_count: u32,
    pub primary_editions: Vec<EditionKey>,
    pub secondary_editions: Vec<EditionKey>,
}

impl From<EntityHistory> for EntityHistoryResponse {
    fn from(history: EntityHistory) -> Self {
        Self {
            canonical_id: history.canonical_id,
            primary_count: history.primary_count,
            secondary_count: history.secondary_count,
            primary_editions: history.primary_editions,
            secondary_editions: history.secondary_editions,
        }
    }
}

/// Country selector contents.
#[derive(Debug, Serialize)]
pub struct EntityListResponse {
    pub total: usize,
    pub items: Vec<EntitySummary>,
}

#[derive(Debug, Serialize)]
pub struct EntitySummary {
    pub canonical_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub map_eligible: bool,
    pub names: Vec<String>,
}

impl From<KnownEntity> for EntitySummary {
    fn from(entity: KnownEntity) -> Self {
        Self {
            map_eligible: entity.is_map_eligible(),
            canonical_id: entity.canonical_id,
            code: entity.code,
            names: entity.names,
        }
    }
}
