//! Transport-level errors and their JSON rendering

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use social_storage::{ErrorKind, StorageError};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Storage(e) => e.kind(),
        }
    }

    /// The status this error would carry if failures were not collapsed.
    pub fn intended_status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Io => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(
            intended = %self.intended_status(),
            error = %self,
            "Request failed"
        );

        // Existing clients expect every failure as 404.
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intended_status() {
        assert_eq!(
            ApiError::Validation("bad".into()).intended_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StorageError::NotFound("user doesn't exist".into())).intended_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StorageError::Io(std::io::Error::other("boom"))).intended_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_every_error_renders_as_404() {
        let errors = [
            ApiError::Validation("bad".into()),
            ApiError::NotFound("missing".into()),
            ApiError::from(StorageError::Io(std::io::Error::other("boom"))),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }
}
