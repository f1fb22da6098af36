//! A read-only web UI for browsing a Docker Registry over its v2 HTTP API.
//!
//! The crate is split in three parts:
//!
//! * [`config`] resolves the process configuration from built-in defaults, an
//!   optional YAML file and command-line overrides.
//! * [`v2`] is an asynchronous client for the registry's v2 HTTP API
//!   (catalog, tags, manifests and image-configuration blobs).
//! * [`web`] serves the HTML front end and maps registry failures to
//!   per-request HTTP errors.
//!
//! The binary wires the three together: configuration is resolved once at
//! startup, a single [`v2::Client`] is built from it, and every inbound
//! request borrows that client through the shared application state.

pub mod config;
pub mod errors;
pub mod mediatypes;
pub mod v2;
pub mod web;

/// Default User-Agent for outgoing registry requests.
pub static USER_AGENT: &str = concat!("registry-gui/", env!("CARGO_PKG_VERSION"));
