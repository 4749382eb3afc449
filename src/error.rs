//! Application error type shared by the query service and the HTTP layer.
//!
//! Every variant carries a human-readable message and a JSON `details` value.
//! Handlers return `Result<_, AppError>` and rely on the [`IntoResponse`]
//! implementation to render a uniform error body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Edition not found", "details": { "edition_key": 9999 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors raised by the record store, aggregator and query service.
///
/// `DataIntegrity` only occurs while loading the dataset and aborts startup.
/// The other variants are per-request and recoverable.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    InvalidMetric { message: String, details: Value },

    #[error("{message}")]
    DataIntegrity { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_metric(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidMetric {
            message: message.into(),
            details,
        }
    }

    pub fn data_integrity(message: impl Into<String>, details: Value) -> Self {
        Self::DataIntegrity {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code used in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::InvalidMetric { .. } => "invalid_metric",
            AppError::DataIntegrity { .. } => "data_integrity",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidMetric { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DataIntegrity { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::InvalidMetric { message, details }
            | AppError::DataIntegrity { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).code(),
            "validation_error"
        );
        assert_eq!(AppError::not_found("nf", json!({})).code(), "not_found");
        assert_eq!(
            AppError::invalid_metric("metric", json!({})).code(),
            "invalid_metric"
        );
        assert_eq!(
            AppError::data_integrity("dup", json!({})).code(),
            "data_integrity"
        );
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            AppError::not_found("nf", json!({})).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::invalid_metric("m", json!({}))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::data_integrity("d", json!({}))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Edition not found", json!({ "edition_key": 9999 }));
        assert_eq!(err.to_string(), "Edition not found");
    }
}
