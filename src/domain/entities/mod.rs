//! Core domain entities.
//!
//! - [`EditionRecord`] - One tournament edition as stored
//! - [`Role`] - Primary (winner) or secondary (runner-up) result
//! - [`EntityStats`] - Aggregated counts for one canonical entity
//! - [`Metric`] - Map coloring metric

pub mod edition;
pub mod metric;
pub mod stats;

pub use edition::{EditionKey, EditionRecord, Role};
pub use metric::Metric;
pub use stats::EntityStats;
