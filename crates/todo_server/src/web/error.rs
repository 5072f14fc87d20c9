use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use std::fmt::{Display, Formatter};
use todo_core::{RepoError, TodoId};

/// Failure surfaced by an API handler.
#[derive(Debug)]
pub enum ApiError {
    Repo(RepoError),
    NotFound(TodoId),
    InvalidBody(String),
    /// A handler panicked while holding the store lock.
    StorePoisoned,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Repo(RepoError::InvalidArgument(_) | RepoError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Repo(RepoError::IdExhausted { .. }) | Self::StorePoisoned => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Repo(err) => err.kind(),
            Self::NotFound(_) => "not_found",
            Self::InvalidBody(_) => "invalid_body",
            Self::StorePoisoned => "store_unavailable",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidBody(reason) => write!(f, "invalid request body: {reason}"),
            Self::StorePoisoned => write!(f, "todo store is unavailable"),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event=api_error module=web status=error error_code={} error={}",
                self.kind(),
                self
            );
        }
        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));
        (status, body).into_response()
    }
}
