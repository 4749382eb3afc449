//! Canonical entity to geographic code lookup.

use std::collections::HashMap;

/// ISO-3166 alpha-3 codes keyed by canonical identifier.
///
/// The table is a lookup, not a registry: a missing code only makes the
/// entity ineligible for the map.
#[derive(Debug, Clone, Default)]
pub struct GeoCodeTable {
    codes: HashMap<String, String>,
}

impl GeoCodeTable {
    pub fn new<I, K, V>(codes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|(id, code)| (id.into(), code.into()))
                .collect(),
        }
    }

    pub fn code_for(&self, canonical_id: &str) -> Option<&str> {
        self.codes.get(canonical_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lookup() {
        let table = GeoCodeTable::new([("Germany", "DEU"), ("Brazil", "BRA")]);

        assert_eq!(table.code_for("Germany"), Some("DEU"));
        assert_eq!(table.code_for("West Germany"), None);
        assert_eq!(table.len(), 2);
    }
}
