//! Application layer services.
//!
//! Services consume repository traits from the domain layer and expose the
//! read operations used by HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::query_service::QueryService`] - Map aggregates, edition detail and entity history

pub mod services;
