use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use credence_core::CredenceError;
use serde_json::json;

/// Error returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::Internal(message) => message,
        }
    }
}

impl From<CredenceError> for ApiError {
    fn from(err: CredenceError) -> Self {
        if err.is_input_error() { Self::BadRequest(err.to_string()) } else { Self::Internal(err.to_string()) }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest(message) => tracing::warn!(%message, "rejected request"),
            Self::Internal(message) => tracing::error!(%message, "request failed"),
        }
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let err: ApiError = CredenceError::InvalidUrl("nope".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = CredenceError::SerializeError("boom".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to serialize output: boom");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("No text or URL provided").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
