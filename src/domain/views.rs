//! Read models returned by the query service.

use crate::domain::entities::EditionKey;

/// One map cell: an entity, its geographic code and the selected metric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub entity: String,
    pub code: String,
    pub value: u32,
}

/// Year panel contents with period-accurate entity names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionDetail {
    pub edition_key: EditionKey,
    pub primary_display_name: String,
    pub secondary_display_name: String,
    pub result_summary: String,
    pub location: String,
}

/// Country panel contents. Edition lists are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityHistory {
    pub canonical_id: String,
    pub primary_count: u32,
    pub secondary_count: u32,
    pub primary_editions: Vec<EditionKey>,
    pub secondary_editions: Vec<EditionKey>,
}

/// Entry in the country selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownEntity {
    pub canonical_id: String,
    pub code: Option<String>,
    /// Every name the entity appears under, canonical first.
    pub names: Vec<String>,
}

impl KnownEntity {
    pub fn is_map_eligible(&self) -> bool {
        self.code.is_some()
    }
}
