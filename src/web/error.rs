//! Mapping of registry and rendering failures to HTTP responses.
//!
//! Handlers return `Result<_, WebError>`; a failed registry round trip turns
//! into a per-request error page instead of taking the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::errors::Error;

/// Per-request handler error.
///
/// Carries the status and message shown to the caller; the underlying error
/// is logged when the response is produced, not exposed to the client.
#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
        }
    }

    fn with_source(
        status: StatusCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<Error> for WebError {
    fn from(err: Error) -> Self {
        match &err {
            Error::Reqwest(_) => {
                Self::with_source(StatusCode::BAD_GATEWAY, "registry unreachable", err)
            }
            Error::Json(_) => Self::with_source(
                StatusCode::BAD_GATEWAY,
                "invalid response from registry",
                err,
            ),
            Error::Client { status } if *status == StatusCode::NOT_FOUND => {
                Self::with_source(StatusCode::NOT_FOUND, "not found in registry", err)
            }
            Error::Client { .. } | Error::Server { .. } | Error::UnexpectedHttpStatus(_) => {
                Self::with_source(StatusCode::BAD_GATEWAY, "registry request failed", err)
            }
            Error::UrlParse(_) | Error::RepositoryName(_) => {
                Self::with_source(StatusCode::BAD_REQUEST, "invalid request", err)
            }
        }
    }
}

impl From<tera::Error> for WebError {
    fn from(err: tera::Error) -> Self {
        Self::with_source(
            StatusCode::INTERNAL_SERVER_ERROR,
            "template rendering failed",
            err,
        )
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self.source {
            Some(source) => error!(
                status = %self.status,
                error = %source,
                "request failed: {}", self.message
            ),
            None => error!(status = %self.status, "request failed: {}", self.message),
        }
        (self.status, self.message).into_response()
    }
}
