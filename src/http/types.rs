use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::{error::TodoError, todo::TodoId};

/// Failures the endpoint layer turns into HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with the not-found message as a plain-text body.
    NotFound(String),
    /// 400 for an update whose body id disagrees with the path id.
    IdMismatch { path: TodoId, body: TodoId },
    /// 500 with a generic body; the cause is only logged.
    Internal(anyhow::Error),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TodoError::Storage(source) => ApiError::Internal(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                warn!("{message}");
                (StatusCode::NOT_FOUND, message).into_response()
            }
            ApiError::IdMismatch { path, body } => {
                warn!(%path, %body, "rejected update with mismatched ids");
                (StatusCode::BAD_REQUEST, format!("id {path} in the path does not match id {body} in the body")).into_response()
            }
            ApiError::Internal(err) => {
                error!("request failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
