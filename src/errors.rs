//! Error chains, types and traits.

use reqwest::StatusCode;

/// Library error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http transport failure: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("uri parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("invalid percent-encoding in repository name: {0}")]
    RepositoryName(#[from] std::string::FromUtf8Error),
    #[error("client error: {status}")]
    Client { status: StatusCode },
    #[error("server error: {status}")]
    Server { status: StatusCode },
    #[error("unexpected HTTP status '{0}'")]
    UnexpectedHttpStatus(StatusCode),
}

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;
