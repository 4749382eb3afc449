//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod aggregate;
pub mod editions;
pub mod entities;
pub mod health;
pub mod metrics;

pub use aggregate::aggregate_handler;
pub use editions::{edition_detail_handler, edition_list_handler};
pub use entities::{entity_history_handler, entity_list_handler};
pub use health::health_handler;
pub use metrics::metric_list_handler;
