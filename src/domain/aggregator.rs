//! Per-entity aggregation over edition records.
//!
//! Replaces a group-by / outer-join / fill-zero pipeline with an explicit
//! typed fold: every record contributes one primary and one secondary result,
//! attributed to the canonical entity.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::{EditionRecord, EntityStats, Role};
use crate::domain::geo_codes::GeoCodeTable;
use crate::domain::normalizer::NameNormalizer;

/// Aggregated stats for every entity that appears in at least one record.
///
/// Iteration follows first-encounter order. Counts do not depend on record
/// order.
#[derive(Debug, Clone, Default)]
pub struct EntityAggregates {
    entries: Vec<EntityStats>,
    index: HashMap<String, usize>,
}

impl EntityAggregates {
    pub fn get(&self, canonical_id: &str) -> Option<&EntityStats> {
        self.index.get(canonical_id).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityStats> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, canonical_id: &str) -> bool {
        self.index.contains_key(canonical_id)
    }

    fn entry_mut(&mut self, canonical_id: &str, codes: &GeoCodeTable) -> &mut EntityStats {
        let position = match self.index.get(canonical_id) {
            Some(&position) => position,
            None => {
                let code = codes.code_for(canonical_id).map(str::to_string);
                if code.is_none() {
                    warn!(entity = canonical_id, "No geographic code, excluded from map views");
                }
                self.entries.push(EntityStats::new(canonical_id, code));
                self.index
                    .insert(canonical_id.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position]
    }
}

/// Computes per-entity primary/secondary counts for `records`.
///
/// Entities are created on first encounter with both counters at zero.
/// Entities without a geographic code are still aggregated.
pub fn compute_aggregates(
    records: &[EditionRecord],
    normalizer: &NameNormalizer,
    codes: &GeoCodeTable,
) -> EntityAggregates {
    let mut aggregates = EntityAggregates::default();

    for record in records {
        for role in Role::ALL {
            let canonical = normalizer.canonicalize(record.entity(role));
            aggregates.entry_mut(canonical, codes).add_result(role);
        }
    }

    debug!(
        records = records.len(),
        entities = aggregates.len(),
        "Computed entity aggregates"
    );

    aggregates
}
