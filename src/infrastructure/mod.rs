//! Infrastructure layer.
//!
//! # Modules
//!
//! - [`dataset`] - Embedded dataset and JSON file loading
//! - [`persistence`] - In-memory record store

pub mod dataset;
pub mod persistence;
