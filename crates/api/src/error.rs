//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use workout_store::WorkoutStoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// No route matches the request path.
    NotFound,
    /// The path exists but not for this method.
    MethodNotAllowed,
    /// A storage call failed. Only `context` is shown to the client.
    Store {
        context: &'static str,
        source: WorkoutStoreError,
    },
}

impl ApiError {
    /// Wraps a store error with the message returned to the client.
    pub fn store(context: &'static str) -> impl FnOnce(WorkoutStoreError) -> Self {
        move |source| ApiError::Store { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::Store { context, source } => {
                tracing::error!(error = %source, context, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
