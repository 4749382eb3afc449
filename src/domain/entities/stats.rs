//! Per-entity aggregate counters.

use super::edition::Role;

/// Aggregated finals record for one canonical entity.
///
/// Both counters start at zero when the entity is first encountered, so an
/// entity that only ever finished second still reports `primary_count == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStats {
    pub canonical_id: String,
    /// Geographic code (ISO-3166 alpha-3). `None` makes the entity map-ineligible.
    pub code: Option<String>,
    pub primary_count: u32,
    pub secondary_count: u32,
}

impl EntityStats {
    pub fn new(canonical_id: impl Into<String>, code: Option<String>) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            code,
            primary_count: 0,
            secondary_count: 0,
        }
    }

    /// Counts one appearance in the given role.
    pub fn add_result(&mut self, role: Role) {
        match role {
            Role::Primary => self.primary_count += 1,
            Role::Secondary => self.secondary_count += 1,
        }
    }

    pub fn total_count(&self) -> u32 {
        self.primary_count + self.secondary_count
    }

    pub fn count(&self, role: Role) -> u32 {
        match role {
            Role::Primary => self.primary_count,
            Role::Secondary => self.secondary_count,
        }
    }

    pub fn is_map_eligible(&self) -> bool {
        self.code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_start_at_zero() {
        let stats = EntityStats::new("Brazil", Some("BRA".to_string()));

        assert_eq!(stats.primary_count, 0);
        assert_eq!(stats.secondary_count, 0);
        assert_eq!(stats.total_count(), 0);
        assert!(stats.is_map_eligible());
    }

    #[test]
    fn test_add_result_updates_total() {
        let mut stats = EntityStats::new("Germany", Some("DEU".to_string()));
        stats.add_result(Role::Primary);
        stats.add_result(Role::Primary);
        stats.add_result(Role::Secondary);

        assert_eq!(stats.count(Role::Primary), 2);
        assert_eq!(stats.count(Role::Secondary), 1);
        assert_eq!(stats.total_count(), 3);
    }

    #[test]
    fn test_missing_code_is_not_map_eligible() {
        let stats = EntityStats::new("Atlantis", None);
        assert!(!stats.is_map_eligible());
    }
}
