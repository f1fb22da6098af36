use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::v2::Client;

/// List of repositories hosted by a registry.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Catalog {
    pub repositories: Vec<String>,
}

impl Client {
    /// List the repositories in the registry catalog.
    ///
    /// A single unpaginated request; registries answering with a `Link`
    /// header for further pages are not followed.
    pub async fn get_catalog(&self) -> Result<Catalog> {
        let url = Url::parse(&format!("{}/v2/_catalog", self.base_url))?;
        self.fetch_json(url).await
    }
}
