#![allow(dead_code)]

use finals_dashboard::domain::entities::EditionRecord;
use finals_dashboard::infrastructure::dataset::Dataset;
use finals_dashboard::state::AppState;

/// State over the embedded World Cup finals dataset.
pub fn create_test_state() -> AppState {
    let dataset = Dataset::embedded().unwrap();
    AppState::from_dataset(dataset).unwrap()
}

/// Dataset built from explicit records, aliases and codes.
pub fn create_dataset(
    editions: Vec<EditionRecord>,
    aliases: &[(&str, &str)],
    codes: &[(&str, &str)],
) -> Dataset {
    Dataset {
        editions,
        aliases: aliases
            .iter()
            .map(|(historical, canonical)| (historical.to_string(), canonical.to_string()))
            .collect(),
        codes: codes
            .iter()
            .map(|(id, code)| (id.to_string(), code.to_string()))
            .collect(),
        overrides: vec![],
    }
}

pub fn create_state_from(
    editions: Vec<EditionRecord>,
    aliases: &[(&str, &str)],
    codes: &[(&str, &str)],
) -> AppState {
    AppState::from_dataset(create_dataset(editions, aliases, codes)).unwrap()
}
