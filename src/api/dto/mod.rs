//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod aggregate;
pub mod edition;
pub mod entity;
pub mod health;
pub mod metric;
