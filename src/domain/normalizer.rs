//! Historical name normalization.
//!
//! Two independent finite tables:
//!
//! 1. **Aliases** map a historical name to its canonical identifier
//!    (`"West Germany" -> "Germany"`). Aggregation runs on canonical ids so
//!    both names are counted together.
//! 2. **Overrides** record the name an entity was known by at one specific
//!    edition and role (`(1974, primary) -> "West Germany"`). Detail panels
//!    use them to show period-accurate names.
//!
//! Records themselves are never rewritten.

use std::collections::HashMap;

use crate::domain::entities::{EditionKey, EditionRecord, Role};

/// An explicit historical-name exception for one edition and role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NameOverride {
    pub canonical_id: String,
    pub edition_key: EditionKey,
    pub role: Role,
    pub historical_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OverrideEntry {
    canonical_id: String,
    historical_name: String,
}

/// Canonicalizes historical names and recovers them per edition.
#[derive(Debug, Clone, Default)]
pub struct NameNormalizer {
    aliases: HashMap<String, String>,
    overrides: HashMap<(EditionKey, Role), OverrideEntry>,
}

impl NameNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a normalizer from `(historical, canonical)` pairs.
    pub fn from_aliases<I, H, C>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (H, C)>,
        H: Into<String>,
        C: Into<String>,
    {
        aliases
            .into_iter()
            .fold(Self::new(), |normalizer, (historical, canonical)| {
                normalizer.with_alias(historical, canonical)
            })
    }

    pub fn with_alias(mut self, historical: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(historical.into(), canonical.into());
        self
    }

    /// Registers the name `canonical_id` was known by at `(edition_key, role)`.
    ///
    /// Only one entity holds a role per edition, so a later override for the
    /// same slot replaces the earlier one.
    pub fn with_override(mut self, name_override: NameOverride) -> Self {
        self.overrides.insert(
            (name_override.edition_key, name_override.role),
            OverrideEntry {
                canonical_id: name_override.canonical_id,
                historical_name: name_override.historical_name,
            },
        );
        self
    }

    /// Adds an override for every record slot whose stored name is an alias.
    ///
    /// This replaces hand-maintained year lists: if the 1954 record says
    /// "West Germany" and that name canonicalizes to "Germany", then
    /// `(1954, primary)` displays as "West Germany".
    pub fn derive_overrides(self, records: &[EditionRecord]) -> Self {
        records
            .iter()
            .flat_map(|record| Role::ALL.map(|role| (record, role)))
            .fold(self, |normalizer, (record, role)| {
                let stored = record.entity(role);
                let canonical = normalizer.canonicalize(stored);
                if canonical == stored {
                    return normalizer;
                }
                let name_override = NameOverride {
                    canonical_id: canonical.to_string(),
                    edition_key: record.edition_key,
                    role,
                    historical_name: stored.to_string(),
                };
                normalizer.with_override(name_override)
            })
    }

    /// Maps a raw name to its canonical identifier. Unmapped names are returned unchanged.
    pub fn canonicalize<'a>(&'a self, raw_name: &'a str) -> &'a str {
        self.aliases
            .get(raw_name)
            .map(String::as_str)
            .unwrap_or(raw_name)
    }

    /// Returns the name `canonical_id` was known by at this edition and role.
    ///
    /// Falls back to `canonical_id` when no override exists for the exact
    /// `(canonical_id, edition_key, role)` triple.
    pub fn historical_name_for<'a>(
        &'a self,
        canonical_id: &'a str,
        edition_key: EditionKey,
        role: Role,
    ) -> &'a str {
        match self.overrides.get(&(edition_key, role)) {
            Some(entry) if entry.canonical_id == canonical_id => &entry.historical_name,
            _ => canonical_id,
        }
    }

    /// All historical names that canonicalize to `canonical_id`, including itself.
    pub fn names_for<'a>(&'a self, canonical_id: &'a str) -> Vec<&'a str> {
        let mut names: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, canonical)| canonical.as_str() == canonical_id)
            .map(|(historical, _)| historical.as_str())
            .collect();
        names.sort_unstable();
        names.insert(0, canonical_id);
        names
    }

    /// The first `(historical, target)` alias whose target is itself an alias.
    ///
    /// Canonicalization resolves a single step, so a chain (or a cycle)
    /// would split one entity across several ids.
    pub fn chained_alias(&self) -> Option<(&str, &str)> {
        self.aliases
            .iter()
            .filter(|(_, target)| self.aliases.contains_key(target.as_str()))
            .map(|(historical, target)| (historical.as_str(), target.as_str()))
            .min()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german_normalizer() -> NameNormalizer {
        NameNormalizer::from_aliases([("West Germany", "Germany")])
    }

    #[test]
    fn test_canonicalize_alias() {
        let normalizer = german_normalizer();
        assert_eq!(normalizer.canonicalize("West Germany"), "Germany");
    }

    #[test]
    fn test_canonicalize_unmapped_name_is_identity() {
        let normalizer = german_normalizer();
        assert_eq!(normalizer.canonicalize("Brazil"), "Brazil");
        assert_eq!(normalizer.canonicalize("Germany"), "Germany");
    }

    #[test]
    fn test_historical_name_with_explicit_override() {
        let normalizer = german_normalizer().with_override(NameOverride {
            canonical_id: "Germany".to_string(),
            edition_key: 1974,
            role: Role::Primary,
            historical_name: "West Germany".to_string(),
        });

        assert_eq!(
            normalizer.historical_name_for("Germany", 1974, Role::Primary),
            "West Germany"
        );
        assert_eq!(
            normalizer.historical_name_for("Germany", 1974, Role::Secondary),
            "Germany"
        );
        assert_eq!(
            normalizer.historical_name_for("Germany", 2014, Role::Primary),
            "Germany"
        );
    }

    #[test]
    fn test_override_requires_matching_entity() {
        let normalizer = german_normalizer().with_override(NameOverride {
            canonical_id: "Germany".to_string(),
            edition_key: 1974,
            role: Role::Primary,
            historical_name: "West Germany".to_string(),
        });

        assert_eq!(
            normalizer.historical_name_for("Netherlands", 1974, Role::Primary),
            "Netherlands"
        );
    }

    #[test]
    fn test_derive_overrides_from_records() {
        let records = vec![
            EditionRecord::new(1954, "West Germany", "Hungary", "3-2", "Bern"),
            EditionRecord::new(1966, "England", "West Germany", "4-2 (OT)", "London"),
            EditionRecord::new(2014, "Germany", "Argentina", "1-0 (OT)", "Rio de Janeiro"),
        ];

        let normalizer = german_normalizer().derive_overrides(&records);

        assert_eq!(normalizer.override_count(), 2);
        assert_eq!(
            normalizer.historical_name_for("Germany", 1954, Role::Primary),
            "West Germany"
        );
        assert_eq!(
            normalizer.historical_name_for("Germany", 1966, Role::Secondary),
            "West Germany"
        );
        assert_eq!(
            normalizer.historical_name_for("Germany", 2014, Role::Primary),
            "Germany"
        );
    }

    #[test]
    fn test_round_trip_recovers_stored_name() {
        let records = vec![
            EditionRecord::new(1990, "West Germany", "Argentina", "1-0", "Rome"),
            EditionRecord::new(2002, "Brazil", "Germany", "2-0", "Yokohama"),
        ];
        let normalizer = german_normalizer().derive_overrides(&records);

        for record in &records {
            for role in Role::ALL {
                let stored = record.entity(role);
                let canonical = normalizer.canonicalize(stored);
                assert_eq!(
                    normalizer.historical_name_for(canonical, record.edition_key, role),
                    stored
                );
            }
        }
    }

    #[test]
    fn test_names_for_lists_canonical_first() {
        let normalizer = german_normalizer().with_alias("FRG", "Germany");

        assert_eq!(
            normalizer.names_for("Germany"),
            vec!["Germany", "FRG", "West Germany"]
        );
        assert_eq!(normalizer.names_for("Brazil"), vec!["Brazil"]);
    }

    #[test]
    fn test_names_for_borrowed_id_outlives_call() {
        let normalizer = german_normalizer();
        let names = {
            let id = String::from("Germany");
            normalizer
                .names_for(&id)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert_eq!(names, vec!["Germany", "West Germany"]);
    }

    #[test]
    fn test_chained_alias_detected() {
        let normalizer = german_normalizer().with_alias("FRG", "West Germany");

        assert_eq!(
            normalizer.chained_alias(),
            Some(("FRG", "West Germany"))
        );
        assert_eq!(german_normalizer().chained_alias(), None);
    }
}
