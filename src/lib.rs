//! # Finals Dashboard
//!
//! Query service behind an interactive dashboard of FIFA World Cup finals
//! (1930-2022), built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Edition records, name normalization, aggregation
//! - **Application Layer** ([`application`]) - The query service
//! - **Infrastructure Layer** ([`infrastructure`]) - Dataset loading and the in-memory record store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Queries
//!
//! - Per-country wins, runner-up appearances or total finals, for map coloring
//! - A single final by year, with period-accurate names ("West Germany" in 1974)
//! - A country's finals history across all of its historical names
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the embedded dataset
//! cargo run
//!
//! # Or query from the terminal
//! cargo run --bin finals -- aggregate --metric total_count
//! cargo run --bin finals -- edition 1974
//! cargo run --bin finals -- history Germany
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::QueryService;
    pub use crate::domain::entities::{EditionKey, EditionRecord, Metric, Role};
    pub use crate::domain::normalizer::NameNormalizer;
    pub use crate::error::AppError;
    pub use crate::infrastructure::dataset::Dataset;
    pub use crate::state::AppState;
}
