//! Static dataset loading.
//!
//! The World Cup finals dataset is embedded in the binary. A JSON file with
//! the same layout can replace it at startup (see `DATASET_PATH`):
//!
//! ```json
//! {
//!   "editions": [ { "year": 1974, "winner": "West Germany", "runner_up": "Netherlands", "score": "2-1", "venue": "Munich" } ],
//!   "aliases":  { "West Germany": "Germany" },
//!   "codes":    { "Germany": "DEU", "Netherlands": "NLD" },
//!   "overrides": []
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domain::entities::EditionRecord;
use crate::domain::geo_codes::GeoCodeTable;
use crate::domain::normalizer::{NameNormalizer, NameOverride};
use crate::error::AppError;

const EMBEDDED_DATASET: &str = include_str!("../../data/world_cup_finals.json");

/// Errors that can occur while reading a dataset document.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw dataset document before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub editions: Vec<EditionRecord>,

    /// Historical name -> canonical identifier.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Canonical identifier -> ISO-3166 alpha-3 code.
    #[serde(default)]
    pub codes: BTreeMap<String, String>,

    /// Explicit display-name exceptions on top of the ones derived from records.
    #[serde(default)]
    pub overrides: Vec<NameOverride>,
}

impl Dataset {
    /// The World Cup finals 1930-2022 shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] if the embedded document is malformed.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read and
    /// [`DatasetError::Parse`] if it is not a valid dataset document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        info!(path = %path.display(), editions = dataset.editions.len(), "Dataset read from file");
        Ok(dataset)
    }

    /// Loads from `path` when given, otherwise the embedded dataset.
    pub fn load(path: Option<&str>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Builds the name normalizer: aliases, then derived overrides, then
    /// explicit overrides (which win on conflict).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DataIntegrity`] if:
    /// - an alias points at another alias (chains and cycles)
    /// - an explicit override names an unknown edition, or an entity other
    ///   than the one holding that role in the edition
    pub fn normalizer(&self) -> Result<NameNormalizer, AppError> {
        let aliased = NameNormalizer::from_aliases(
            self.aliases
                .iter()
                .map(|(historical, canonical)| (historical.as_str(), canonical.as_str())),
        );

        if let Some((historical, target)) = aliased.chained_alias() {
            return Err(AppError::data_integrity(
                "Alias target is itself an alias",
                json!({ "alias": historical, "target": target }),
            ));
        }

        for name_override in &self.overrides {
            self.check_override(&aliased, name_override)?;
        }

        let derived = aliased.derive_overrides(&self.editions);

        Ok(self
            .overrides
            .iter()
            .cloned()
            .fold(derived, NameNormalizer::with_override))
    }

    fn check_override(
        &self,
        aliased: &NameNormalizer,
        name_override: &NameOverride,
    ) -> Result<(), AppError> {
        let record = self
            .editions
            .iter()
            .find(|record| record.edition_key == name_override.edition_key)
            .ok_or_else(|| {
                AppError::data_integrity(
                    "Name override refers to an unknown edition",
                    json!({ "edition_key": name_override.edition_key }),
                )
            })?;

        let holder = aliased.canonicalize(record.entity(name_override.role));
        if holder != name_override.canonical_id {
            return Err(AppError::data_integrity(
                "Name override does not match the entity in that role",
                json!({
                    "edition_key": name_override.edition_key,
                    "role": name_override.role,
                    "canonical_id": name_override.canonical_id,
                    "entity": holder,
                }),
            ));
        }

        Ok(())
    }

    pub fn geo_codes(&self) -> GeoCodeTable {
        GeoCodeTable::new(
            self.codes
                .iter()
                .map(|(id, code)| (id.as_str(), code.as_str())),
        )
    }
}
