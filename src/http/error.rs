//! API error responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::analyzer::AnalyzerError;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Parameter 'url' is required")]
    MissingUrl,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    /// Whether the client should offer to try again.
    pub retryable: bool,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidBody(_) | ApiError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Session(SessionError::StoreFull { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Analyzer(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::MissingUrl
            | ApiError::InvalidBody(_)
            | ApiError::InvalidPath(_)
            | ApiError::Session(SessionError::NotFound(_)) => false,
            ApiError::Session(SessionError::StoreFull { .. }) => true,
            ApiError::Analyzer(e) => e.is_retryable(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
            retryable: self.is_retryable(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(SessionError::NotFound(Uuid::nil())).status(),
            StatusCode::NOT_FOUND
        );

        let analyzer = ApiError::from(AnalyzerError::Status { status: 500, body: String::new() });
        assert_eq!(analyzer.status(), StatusCode::BAD_GATEWAY);
        assert!(analyzer.is_retryable());
    }
}
