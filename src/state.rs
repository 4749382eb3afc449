//! Shared application state injected into handlers.

use std::sync::Arc;

use tracing::info;

use crate::application::services::QueryService;
use crate::error::AppError;
use crate::infrastructure::dataset::Dataset;
use crate::infrastructure::persistence::InMemoryRecordRepository;

/// Query service over the in-memory record store.
pub type DashboardQueryService = QueryService<InMemoryRecordRepository>;

/// State shared by every request. Immutable after construction.
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<DashboardQueryService>,
}

impl AppState {
    pub fn new(query_service: Arc<DashboardQueryService>) -> Self {
        Self { query_service }
    }

    /// Validates `dataset` and derives all aggregates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DataIntegrity`] if the records, aliases or name
    /// overrides fail validation.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, AppError> {
        let normalizer = dataset.normalizer()?;
        let codes = dataset.geo_codes();
        let repository = InMemoryRecordRepository::load(dataset.editions, &normalizer)?;

        let query_service = QueryService::new(Arc::new(repository), normalizer, &codes);

        info!(
            editions = query_service.editions().len(),
            entities = query_service.aggregates().len(),
            "Dashboard context initialized"
        );

        Ok(Self::new(Arc::new(query_service)))
    }
}
