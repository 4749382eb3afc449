//! Dashboard query service.
//!
//! Answers the three dashboard queries (map aggregate, year detail, country
//! history) plus the selector catalogs, all as pure reads over state built
//! once in [`QueryService::new`].

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::aggregator::{EntityAggregates, compute_aggregates};
use crate::domain::entities::{EditionKey, Metric, Role};
use crate::domain::geo_codes::GeoCodeTable;
use crate::domain::normalizer::NameNormalizer;
use crate::domain::repositories::RecordRepository;
use crate::domain::views::{AggregateEntry, EditionDetail, EntityHistory, KnownEntity};
use crate::error::AppError;

/// Read-only query service over an immutable record store.
///
/// Aggregates are derived once at construction. The service holds no
/// interior mutability and can be shared across request tasks behind an
/// `Arc` without locking.
pub struct QueryService<R: RecordRepository> {
    repository: Arc<R>,
    normalizer: NameNormalizer,
    aggregates: EntityAggregates,
}

impl<R: RecordRepository> QueryService<R> {
    /// Creates the service and derives entity aggregates from the repository.
    pub fn new(repository: Arc<R>, normalizer: NameNormalizer, codes: &GeoCodeTable) -> Self {
        let aggregates = compute_aggregates(&repository.all_records(), &normalizer, codes);

        Self {
            repository,
            normalizer,
            aggregates,
        }
    }

    /// Per-entity values of `metric` for the map.
    ///
    /// Entities without a geographic code are left out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidMetric`] if `metric` is not one of
    /// `primary_count`, `secondary_count` or `total_count`.
    pub fn aggregate_view(&self, metric: &str) -> Result<Vec<AggregateEntry>, AppError> {
        let metric: Metric = metric.parse()?;
        Ok(self.aggregate_view_for(metric))
    }

    pub fn aggregate_view_for(&self, metric: Metric) -> Vec<AggregateEntry> {
        debug!(%metric, "Building aggregate view");

        self.aggregates
            .iter()
            .filter_map(|stats| {
                stats.code.as_ref().map(|code| AggregateEntry {
                    entity: stats.canonical_id.clone(),
                    code: code.clone(),
                    value: metric.value_of(stats),
                })
            })
            .collect()
    }

    /// Year panel for `edition_key`, with names as they were at the time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this key.
    pub fn edition_detail(&self, edition_key: EditionKey) -> Result<EditionDetail, AppError> {
        debug!(edition_key, "Looking up edition detail");

        let record = self.repository.find_by_key(edition_key).ok_or_else(|| {
            AppError::not_found("Edition not found", json!({ "edition_key": edition_key }))
        })?;

        let display_name = |role: Role| {
            let canonical = self.normalizer.canonicalize(record.entity(role));
            self.normalizer
                .historical_name_for(canonical, edition_key, role)
                .to_string()
        };

        Ok(EditionDetail {
            edition_key,
            primary_display_name: display_name(Role::Primary),
            secondary_display_name: display_name(Role::Secondary),
            result_summary: record.result_summary.clone(),
            location: record.location.clone(),
        })
    }

    /// Country panel for `canonical_id`, across all of its historical names.
    ///
    /// An id that never appears yields zero counts and empty lists. Whether
    /// the id is a known entity at all is answered by [`Self::is_known_entity`].
    pub fn entity_history(&self, canonical_id: &str) -> EntityHistory {
        debug!(entity = canonical_id, "Building entity history");

        let records = self.repository.all_records();
        let editions_in = |role: Role| {
            let mut editions: Vec<EditionKey> = records
                .iter()
                .filter(|record| self.normalizer.canonicalize(record.entity(role)) == canonical_id)
                .map(|record| record.edition_key)
                .collect();
            editions.sort_unstable();
            editions
        };

        let primary_editions = editions_in(Role::Primary);
        let secondary_editions = editions_in(Role::Secondary);

        EntityHistory {
            canonical_id: canonical_id.to_string(),
            primary_count: primary_editions.len() as u32,
            secondary_count: secondary_editions.len() as u32,
            primary_editions,
            secondary_editions,
        }
    }

    /// Edition keys in store order, for the year selector.
    pub fn editions(&self) -> Vec<EditionKey> {
        self.repository
            .all_records()
            .iter()
            .map(|record| record.edition_key)
            .collect()
    }

    /// The year selector's initial value: the latest edition.
    pub fn default_edition(&self) -> Option<EditionKey> {
        self.repository
            .all_records()
            .iter()
            .map(|record| record.edition_key)
            .max()
    }

    /// Every entity that appears in at least one record, in aggregation order.
    pub fn known_entities(&self) -> Vec<KnownEntity> {
        self.aggregates
            .iter()
            .map(|stats| KnownEntity {
                canonical_id: stats.canonical_id.clone(),
                code: stats.code.clone(),
                names: self
                    .normalizer
                    .names_for(&stats.canonical_id)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    pub fn is_known_entity(&self, canonical_id: &str) -> bool {
        self.aggregates.contains(canonical_id)
    }

    pub fn aggregates(&self) -> &EntityAggregates {
        &self.aggregates
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EditionRecord;
    use crate::domain::repositories::MockRecordRepository;

    fn codes() -> GeoCodeTable {
        GeoCodeTable::new([
            ("Germany", "DEU"),
            ("Netherlands", "NLD"),
            ("Argentina", "ARG"),
            ("France", "FRA"),
        ])
    }

    fn normalizer() -> NameNormalizer {
        NameNormalizer::from_aliases([("West Germany", "Germany")])
    }

    fn mock_with(records: Vec<EditionRecord>) -> MockRecordRepository {
        let shared: Arc<[EditionRecord]> = records.into();
        let lookup = Arc::clone(&shared);

        let mut mock_repo = MockRecordRepository::new();
        mock_repo
            .expect_all_records()
            .returning(move || Arc::clone(&shared));
        mock_repo.expect_find_by_key().returning(move |key| {
            lookup.iter().find(|r| r.edition_key == key).cloned()
        });
        mock_repo
    }

    #[test]
    fn test_aggregates_computed_once_at_construction() {
        let mut mock_repo = MockRecordRepository::new();
        mock_repo
            .expect_all_records()
            .times(1)
            .returning(|| Arc::from(vec![EditionRecord::new(2018, "France", "Croatia", "4-2", "Moscow")]));

        let service = QueryService::new(Arc::new(mock_repo), normalizer(), &codes());

        assert_eq!(service.aggregates().len(), 2);
        let _ = service.aggregate_view_for(Metric::TotalCount);
        let _ = service.aggregate_view_for(Metric::PrimaryCount);
    }

    #[test]
    fn test_west_germany_scenario() {
        let records = vec![EditionRecord::new(1974, "West Germany", "Netherlands", "2-1", "Munich")];
        let normalizer = normalizer().derive_overrides(&records);
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer, &codes());

        let detail = service.edition_detail(1974).unwrap();
        assert_eq!(detail.primary_display_name, "West Germany");
        assert_eq!(detail.secondary_display_name, "Netherlands");
        assert_eq!(detail.result_summary, "2-1");
        assert_eq!(detail.location, "Munich");

        let history = service.entity_history("Germany");
        assert_eq!(history.primary_count, 1);
        assert_eq!(history.primary_editions, vec![1974]);
    }

    #[test]
    fn test_total_count_scenario() {
        // A: 2 primary + 1 secondary, B: 0 primary + 2 secondary
        let records = vec![
            EditionRecord::new(1, "A", "B", "1-0", "X"),
            EditionRecord::new(2, "A", "B", "2-0", "Y"),
            EditionRecord::new(3, "C", "A", "3-0", "Z"),
        ];
        let codes = GeoCodeTable::new([("A", "AAA"), ("B", "BBB")]);
        let service = QueryService::new(Arc::new(mock_with(records)), NameNormalizer::new(), &codes);

        let view = service.aggregate_view("total_count").unwrap();

        let value_of = |entity: &str| view.iter().find(|e| e.entity == entity).map(|e| e.value);
        assert_eq!(value_of("A"), Some(3));
        assert_eq!(value_of("B"), Some(2));
        assert_eq!(value_of("C"), None);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_aggregate_view_invalid_metric() {
        let service = QueryService::new(Arc::new(mock_with(vec![])), normalizer(), &codes());

        let result = service.aggregate_view("bogus_metric");
        assert!(matches!(result, Err(AppError::InvalidMetric { .. })));
    }

    #[test]
    fn test_edition_detail_not_found() {
        let records = vec![EditionRecord::new(2022, "Argentina", "France", "3-3 (OT) (4-2 p)", "Lusail")];
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer(), &codes());

        let result = service.edition_detail(9999);
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_entity_history_unknown_entity() {
        let records = vec![EditionRecord::new(2022, "Argentina", "France", "3-3 (OT) (4-2 p)", "Lusail")];
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer(), &codes());

        let history = service.entity_history("Atlantis");
        assert_eq!(history.canonical_id, "Atlantis");
        assert_eq!(history.primary_count, 0);
        assert_eq!(history.secondary_count, 0);
        assert!(history.primary_editions.is_empty());
        assert!(history.secondary_editions.is_empty());
        assert!(!service.is_known_entity("Atlantis"));
        assert!(service.is_known_entity("France"));
    }

    #[test]
    fn test_entity_history_sorted_ascending() {
        let records = vec![
            EditionRecord::new(2022, "Argentina", "France", "3-3 (OT) (4-2 p)", "Lusail"),
            EditionRecord::new(1978, "Argentina", "Netherlands", "3-1 (OT)", "Buenos Aires"),
            EditionRecord::new(1986, "Argentina", "West Germany", "3-2", "Mexico City"),
        ];
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer(), &codes());

        let history = service.entity_history("Argentina");
        assert_eq!(history.primary_editions, vec![1978, 1986, 2022]);
        assert_eq!(history.primary_count, 3);

        let germany = service.entity_history("Germany");
        assert_eq!(germany.secondary_editions, vec![1986]);
    }

    #[test]
    fn test_editions_and_default() {
        let records = vec![
            EditionRecord::new(1978, "Argentina", "Netherlands", "3-1 (OT)", "Buenos Aires"),
            EditionRecord::new(2022, "Argentina", "France", "3-3 (OT) (4-2 p)", "Lusail"),
            EditionRecord::new(1986, "Argentina", "West Germany", "3-2", "Mexico City"),
        ];
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer(), &codes());

        assert_eq!(service.editions(), vec![1978, 2022, 1986]);
        assert_eq!(service.default_edition(), Some(2022));
    }

    #[test]
    fn test_default_edition_empty_store() {
        let service = QueryService::new(Arc::new(mock_with(vec![])), normalizer(), &codes());
        assert_eq!(service.default_edition(), None);
    }

    #[test]
    fn test_known_entities_include_historical_names() {
        let records = vec![
            EditionRecord::new(1986, "Argentina", "West Germany", "3-2", "Mexico City"),
            EditionRecord::new(1934, "Italy", "Czechoslovakia", "2-1 (OT)", "Rome"),
        ];
        let service = QueryService::new(Arc::new(mock_with(records)), normalizer(), &codes());

        let entities = service.known_entities();
        let ids: Vec<&str> = entities.iter().map(|e| e.canonical_id.as_str()).collect();
        assert_eq!(ids, vec!["Argentina", "Germany", "Italy", "Czechoslovakia"]);

        let germany = &entities[1];
        assert_eq!(germany.names, vec!["Germany", "West Germany"]);
        assert!(germany.is_map_eligible());
        assert!(!entities[3].is_map_eligible());
    }
}
