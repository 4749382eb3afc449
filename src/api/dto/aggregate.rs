//! DTOs for the map aggregate endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::views::AggregateEntry;

/// Query parameters for `GET /api/aggregate`.
#[derive(Debug, Deserialize)]
pub struct AggregateQueryParams {
    /// Defaults to `primary_count` when omitted.
    #[serde(default)]
    pub metric: Option<String>,
}

/// Map aggregate for one metric.
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub metric: String,
    pub label: String,
    pub items: Vec<AggregateItem>,
}

/// One map cell.
#[derive(Debug, Serialize)]
pub struct AggregateItem {
    pub entity: String,
    pub code: String,
    pub value: u32,
}

impl From<AggregateEntry> for AggregateItem {
    fn from(entry: AggregateEntry) -> Self {
        Self {
            entity: entry.entity,
            code: entry.code,
            value: entry.value,
        }
    }
}
