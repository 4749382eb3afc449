//! Domain layer: edition records, name normalization and aggregation.
//!
//! Nothing here depends on HTTP or on where the dataset came from.
//!
//! # Architecture
//!
//! - [`entities`] - Edition records, roles, metrics and per-entity counters
//! - [`normalizer`] - Historical name to canonical id, and back per edition
//! - [`geo_codes`] - Canonical id to ISO-3166 alpha-3 code
//! - [`aggregator`] - Per-entity primary/secondary/total counts
//! - [`repositories`] - Record store trait
//! - [`views`] - Read models returned by the query service
//!
//! # Load Flow
//!
//! 1. Dataset is parsed and the [`normalizer::NameNormalizer`] is built from
//!    its alias table plus overrides derived from the records
//! 2. The record store validates integrity (unique keys, distinct entities)
//! 3. [`aggregator::compute_aggregates`] derives counts once
//! 4. Queries read the immutable result

pub mod aggregator;
pub mod entities;
pub mod geo_codes;
pub mod normalizer;
pub mod repositories;
pub mod views;
