use reqwest::{header, Method, Url};
use tracing::trace;

use crate::errors::Result;
use crate::mediatypes::MediaTypes;
use crate::v2::Client;

mod manifest_schema1;
pub use self::manifest_schema1::ManifestSchema1Signed;

mod manifest_schema2;
pub use self::manifest_schema2::ManifestSchema2;

impl Client {
    /// Fetch an image manifest, version 2 schema 1.
    ///
    /// The name and reference parameters identify the image; the reference
    /// may be either a tag or a digest. No `Accept` header is set, as
    /// registries answer with the schema-1 document by default for
    /// compatibility.
    pub async fn get_manifest_schema1(
        &self,
        name: &str,
        reference: &str,
    ) -> Result<ManifestSchema1Signed> {
        let url = self.manifest_url(name, reference)?;
        self.fetch_json(url).await
    }

    /// Fetch an image manifest, version 2 schema 2.
    ///
    /// Forces the schema-2 response via the `Accept` header; this document
    /// carries the config-blob digest needed to retrieve the image
    /// configuration.
    pub async fn get_manifest_schema2(
        &self,
        name: &str,
        reference: &str,
    ) -> Result<ManifestSchema2> {
        let url = self.manifest_url(name, reference)?;
        let res = self
            .build_reqwest(Method::GET, url)
            .header(header::ACCEPT, MediaTypes::ManifestV2S2.to_string())
            .send()
            .await?;

        let status = res.status();
        trace!("GET {} status: {}", res.url(), status);
        super::check_status(&res, status)?;

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn manifest_url(&self, name: &str, reference: &str) -> Result<Url> {
        let name = super::unescape(name)?;
        Ok(Url::parse(&format!(
            "{}/v2/{}/manifests/{}",
            self.base_url, name, reference
        ))?)
    }
}
