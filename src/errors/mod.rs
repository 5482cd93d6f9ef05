//! Unified error handling with consistent API response envelope.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::notion::NotionError;

/// Error detail in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            error: None,
        })
    }

    /// Wrap an error in the envelope.
    pub fn error(code: &str, message: &str) -> Json<Self> {
        Json(Self {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }
}

/// Application error type mapping to HTTP status codes.
///
/// Upstream trouble keeps its detail in the response so the page can say
/// what actually failed instead of rendering an empty dashboard.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Notion token is not configured")]
    MissingCredential,

    #[error("Upstream fetch failed: {0}")]
    Upstream(String),

    #[error("Upstream response malformed: {0}")]
    UpstreamDecode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this error means no credential was configured.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}

impl From<&NotionError> for AppError {
    fn from(err: &NotionError) -> Self {
        match err {
            NotionError::MissingCredential => AppError::MissingCredential,
            NotionError::Transport(_) | NotionError::Api { .. } => {
                AppError::Upstream(err.to_string())
            }
            NotionError::Decode(_) => AppError::UpstreamDecode(err.to_string()),
        }
    }
}

impl From<Arc<NotionError>> for AppError {
    fn from(err: Arc<NotionError>) -> Self {
        Self::from(err.as_ref())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingCredential => (
                StatusCode::SERVICE_UNAVAILABLE,
                "MISSING_CREDENTIAL",
                self.to_string(),
            ),
            AppError::Upstream(msg) => {
                tracing::warn!(error = %msg, "Upstream fetch failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone())
            }
            AppError::UpstreamDecode(msg) => {
                tracing::warn!(error = %msg, "Upstream response malformed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_DECODE", msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ApiResponse::<()> {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_success() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["data"], "hello");
        assert!(json["error"].is_null());
    }

    #[test]
    fn api_response_error() {
        let response = ApiResponse::<()>::error("UPSTREAM_ERROR", "fetch failed");
        let json = serde_json::to_value(&response.0).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(json["error"]["message"], "fetch failed");
    }

    #[test]
    fn app_error_is_missing_credential() {
        let err = AppError::MissingCredential;
        assert!(err.is_missing_credential());
        assert!(!AppError::Upstream("boom".to_string()).is_missing_credential());
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Upstream("connection refused".to_string());
        assert_eq!(err.to_string(), "Upstream fetch failed: connection refused");
    }

    #[test]
    fn missing_credential_maps_from_notion() {
        let err: AppError = AppError::from(&NotionError::MissingCredential);
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[test]
    fn api_failure_maps_to_upstream_with_detail() {
        let notion = NotionError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "API token is invalid.".to_string(),
        };
        match AppError::from(&notion) {
            AppError::Upstream(msg) => assert!(msg.contains("API token is invalid.")),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn decode_failure_maps_to_upstream_decode() {
        let bad_json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = AppError::from(&NotionError::Decode(bad_json));
        assert!(matches!(err, AppError::UpstreamDecode(_)));
    }

    #[test]
    fn shared_errors_convert_too() {
        let err: AppError = Arc::new(NotionError::MissingCredential).into();
        assert!(err.is_missing_credential());
    }
}
