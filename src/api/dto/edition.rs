//! DTOs for edition (year) endpoints.

use serde::Serialize;

use crate::domain::entities::EditionKey;
use crate::domain::views::EditionDetail;

/// Year panel.
#[derive(Debug, Serialize)]
pub struct EditionDetailResponse {
    pub edition_key: EditionKey,
    pub primary_display_name: String,
    pub secondary_display_name: String,
    pub result_summary: String,
    pub location: String,
}

impl From<EditionDetail> for EditionDetailResponse {
    fn from(detail: EditionDetail) -> Self {
        Self {
            edition_key: detail.edition_key,
            primary_display_name: detail.primary_display_name,
            secondary_display_name: detail.secondary_display_name,
            result_summary: detail.result_summary,
            location: detail.location,
        }
    }
}

/// Year selector contents.
#[derive(Debug, Serialize)]
pub struct EditionListResponse {
    pub default: Option<EditionKey>,
    pub items: Vec<EditionKey>,
}
