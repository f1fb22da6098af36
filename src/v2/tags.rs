use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::v2::Client;

/// Tags of a single repository.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tags {
    pub name: String,
    pub tags: Vec<String>,
}

impl Client {
    /// List existing tags for a repository.
    ///
    /// The name may be percent-encoded to carry embedded `/` separators of
    /// multi-segment repositories; it is decoded before the request is built.
    pub async fn get_tags(&self, name: &str) -> Result<Tags> {
        let name = super::unescape(name)?;
        let url = Url::parse(&format!("{}/v2/{}/tags/list", self.base_url, name))?;
        self.fetch_json(url).await
    }
}
