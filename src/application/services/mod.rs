//! Business logic services for the application layer.

pub mod query_service;

pub use query_service::QueryService;
