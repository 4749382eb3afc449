//! Domain entity representing a single tournament edition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an edition. For the World Cup this is the tournament year.
pub type EditionKey = u16;

/// Position an entity finished in for a given edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Top result (winner).
    Primary,
    /// Second-place result (runner-up).
    Secondary,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edition of the tournament as stored in the dataset.
///
/// Entity names are stored exactly as they were known at the time
/// ("West Germany" in 1974), never rewritten. Canonicalization happens in the
/// aggregator through [`crate::domain::normalizer::NameNormalizer`].
///
/// The dataset file may use either the field names below or the shorter
/// dashboard aliases (`year`, `winner`, `runner_up`, `score`, `venue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionRecord {
    #[serde(alias = "year")]
    pub edition_key: EditionKey,
    #[serde(alias = "winner")]
    pub primary_result_entity: String,
    #[serde(alias = "runner_up")]
    pub secondary_result_entity: String,
    #[serde(alias = "score")]
    pub result_summary: String,
    #[serde(alias = "venue")]
    pub location: String,
}

impl EditionRecord {
    /// Creates a new EditionRecord instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let final_1974 = EditionRecord::new(1974, "West Germany", "Netherlands", "2-1", "Munich");
    /// ```
    pub fn new(
        edition_key: EditionKey,
        primary_result_entity: impl Into<String>,
        secondary_result_entity: impl Into<String>,
        result_summary: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            edition_key,
            primary_result_entity: primary_result_entity.into(),
            secondary_result_entity: secondary_result_entity.into(),
            result_summary: result_summary.into(),
            location: location.into(),
        }
    }

    /// Returns the stored entity name for the given role.
    pub fn entity(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary_result_entity,
            Role::Secondary => &self.secondary_result_entity,
        }
    }
}
