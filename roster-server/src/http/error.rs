//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every message a client sees is a fixed string chosen by the handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required body fields absent (404, kept for wire compatibility)
    MissingFields { message: &'static str },

    /// Malformed input: bad id, bad JSON, field too long (400)
    Invalid(ValidationError),

    /// No row matched (404)
    NotFound { message: &'static str },

    /// Store failure (500, source logged and discarded)
    Store {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a validation failure, using `message` when fields are missing.
    pub fn from_validation(err: ValidationError, message: &'static str) -> Self {
        match err {
            ValidationError::Missing { .. } => Self::MissingFields { message },
            other => Self::Invalid(other),
        }
    }

    /// Adapter for `map_err` that tags a store error with the endpoint's message.
    pub fn store(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Store { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingFields { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "missing_fields",
                    "message": message
                }),
            ),
            Self::Invalid(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": message
                }),
            ),
            Self::Store { message, source } => {
                // Log the actual error, return the fixed message
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_fields_is_404_with_message() {
        let err = ApiError::from_validation(
            ValidationError::Missing { field: "name" },
            "please include a name field with your cohort",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "please include a name field with your cohort");
    }

    #[tokio::test]
    async fn too_long_is_400() {
        let err = ApiError::from_validation(
            ValidationError::TooLong { field: "name", max: 128 },
            "unused",
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_error_hides_source() {
        let err = ApiError::store("the cohort could not be added")(DbError::Sqlx(
            sqlx::Error::RowNotFound,
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "the cohort could not be added");
        assert_eq!(body["error"], "internal_error");
    }

    #[tokio::test]
    async fn body_is_message_plus_error_code() {
        let response = ApiError::NotFound {
            message: "no cohorts exist with the provided id",
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "not_found",
                "message": "no cohorts exist with the provided id"
            })
        );
    }
}
