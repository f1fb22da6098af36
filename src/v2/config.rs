use std::time::Duration;

use tracing::{trace, warn};

use crate::errors::Result;
use crate::v2::Client;

/// Outbound requests are given this long to complete, connection setup
/// included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a `Client`.
#[derive(Debug)]
pub struct Config {
    address: String,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "https://registry-1.docker.io".to_string(),
            username: None,
            password: None,
            user_agent: Some(crate::USER_AGENT.to_string()),
        }
    }
}

impl Config {
    /// Set the registry base address, protocol and optional port included
    /// (e.g. `https://registry.example.com:5000`).
    pub fn address(mut self, address: &str) -> Self {
        self.address = address.trim_end_matches('/').to_string();
        self
    }

    /// Set the username to be used for registry authentication.
    pub fn username(mut self, user: Option<String>) -> Self {
        self.username = user;
        self
    }

    /// Set the password to be used for registry authentication.
    pub fn password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    /// Set the user-agent to be used for registry requests.
    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Return a `Client` to interact with a v2 registry.
    pub fn build(self) -> Result<Client> {
        // Fail early on a malformed address instead of on the first request.
        reqwest::Url::parse(&self.address)?;

        let credentials = match (self.username, self.password) {
            (Some(u), Some(p)) => Some((u, p)),
            (None, None) => None,
            (u, p) => {
                warn!("incomplete credentials (username: {}, password: {}), proceeding unauthenticated",
                      u.is_some(), p.is_some());
                None
            }
        };

        let hclient = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        trace!(
            "built client for endpoint {:?} - user {:?}",
            self.address,
            credentials.as_ref().map(|c| &c.0)
        );

        Ok(Client {
            base_url: self.address,
            credentials,
            hclient,
            user_agent: self.user_agent,
        })
    }
}
