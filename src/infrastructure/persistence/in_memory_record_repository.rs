//! In-memory implementation of [`RecordRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{EditionKey, EditionRecord};
use crate::domain::normalizer::NameNormalizer;
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// Immutable record store validated at load time.
///
/// Records keep their input order. Cloning the store is cheap: the record
/// slice is shared.
#[derive(Debug, Clone)]
pub struct InMemoryRecordRepository {
    records: Arc<[EditionRecord]>,
    index: HashMap<EditionKey, usize>,
}

impl InMemoryRecordRepository {
    /// Loads and validates `records`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DataIntegrity`] if:
    /// - two records share an `edition_key`
    /// - a record's primary and secondary entity canonicalize to the same id
    pub fn load(records: Vec<EditionRecord>, normalizer: &NameNormalizer) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Some(previous) = index.insert(record.edition_key, position) {
                return Err(AppError::data_integrity(
                    "Duplicate edition key",
                    json!({
                        "edition_key": record.edition_key,
                        "positions": [previous, position],
                    }),
                ));
            }

            let primary = normalizer.canonicalize(&record.primary_result_entity);
            let secondary = normalizer.canonicalize(&record.secondary_result_entity);
            if primary == secondary {
                return Err(AppError::data_integrity(
                    "Primary and secondary result refer to the same entity",
                    json!({
                        "edition_key": record.edition_key,
                        "entity": primary,
                    }),
                ));
            }
        }

        info!(records = records.len(), "Record store loaded");

        Ok(Self {
            records: records.into(),
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn all_records(&self) -> Arc<[EditionRecord]> {
        Arc::clone(&self.records)
    }

    fn find_by_key(&self, edition_key: EditionKey) -> Option<EditionRecord> {
        self.index
            .get(&edition_key)
            .map(|&position| self.records[position].clone())
    }
}
