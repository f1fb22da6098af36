//! Client library for the Docker Registry API v2.
//!
//! This module provides a `Client` which can be used to list repositories,
//! list tags and retrieve manifests and image-configuration blobs from a
//! registry speaking the v2 HTTP API. Each operation is a single
//! request/response round trip; failures surface as per-call [`Error`]
//! values and never terminate the process.
//!
//! ## Example
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() {
//! let client = registry_gui::v2::Client::configure()
//!     .address("https://registry.example.com:5000")
//!     .build()
//!     .unwrap();
//!
//! let reachable = client.is_v2_supported().await.unwrap();
//! # }
//! ```

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::errors::{Error, Result};

mod config;
pub use self::config::Config;

mod catalog;
pub use self::catalog::Catalog;

mod tags;
pub use self::tags::Tags;

mod manifest;
pub use self::manifest::{ManifestSchema1Signed, ManifestSchema2};

mod blobs;
pub use self::blobs::ConfigBlob;

/// A Client to make outgoing API requests to a registry.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    credentials: Option<(String, String)>,
    hclient: reqwest::Client,
    user_agent: Option<String>,
}

impl Client {
    pub fn configure() -> Config {
        Config::default()
    }

    /// Check whether the registry is reachable and speaks the v2 API.
    ///
    /// By API convention a healthy registry answers `GET /v2` with the JSON
    /// literal `{}`. Any other body is treated as an error envelope: its
    /// entries are logged and the result is `false`. Transport failures
    /// surface as `Err`.
    pub async fn is_v2_supported(&self) -> Result<bool> {
        let url = Url::parse(&format!("{}/v2", self.base_url))?;
        let res = self.build_reqwest(Method::GET, url).send().await?;

        trace!("GET /v2 status: {:?}", res.status());
        let body = res.text().await?;

        if body == "{}" {
            return Ok(true);
        }

        match serde_json::from_str::<Errors>(&body) {
            Ok(envelope) => {
                for e in &envelope.errors {
                    warn!("registry error: code = {}, message = {}", e.code, e.message);
                }
            }
            Err(_) => warn!("registry returned an unrecognized body for /v2"),
        }
        Ok(false)
    }

    /// Build a request with the shared client options applied.
    fn build_reqwest(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self.hclient.request(method, url);

        if let Some((user, password)) = &self.credentials {
            req = req.basic_auth(user, Some(password));
        }
        if let Some(ua) = &self.user_agent {
            req = req.header(reqwest::header::USER_AGENT, ua.as_str());
        }

        req
    }

    /// Execute a GET request and deserialize the JSON response body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let res = self.build_reqwest(Method::GET, url).send().await?;

        let status = res.status();
        trace!("GET {} status: {}", res.url(), status);
        check_status(&res, status)?;

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn check_status(res: &reqwest::Response, status: StatusCode) -> Result<()> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(()),
        Err(_) if status.is_client_error() => Err(Error::Client { status }),
        Err(_) if status.is_server_error() => Err(Error::Server { status }),
        Err(_) => Err(Error::UnexpectedHttpStatus(status)),
    }
}

/// Decode a percent-encoded repository name.
///
/// Multi-segment repository names (`library/nginx`) travel through the
/// router as a single percent-encoded path variable.
fn unescape(name: &str) -> Result<String> {
    Ok(urlencoding::decode(name)?.into_owned())
}

/// Standard error envelope returned by the registry.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Errors {
    pub errors: Vec<ApiError>,
}

/// Single entry in the registry error envelope.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
