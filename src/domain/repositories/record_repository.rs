//! Repository trait for edition records.

use std::sync::Arc;

use crate::domain::entities::{EditionKey, EditionRecord};

/// Read-only access to the loaded edition records.
///
/// There are no mutation operations: the store is populated once at startup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRecordRepository`] - validated in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RecordRepository: Send + Sync {
    /// Returns every record in load order.
    fn all_records(&self) -> Arc<[EditionRecord]>;

    /// Looks up a single edition.
    ///
    /// # Returns
    ///
    /// - `Some(EditionRecord)` if the edition exists
    /// - `None` otherwise; [`crate::application::services::QueryService::edition_detail`]
    ///   turns this into [`crate::error::AppError::NotFound`]
    fn find_by_key(&self, edition_key: EditionKey) -> Option<EditionRecord>;
}
