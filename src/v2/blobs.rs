use std::collections::HashMap;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::v2::Client;

/// Image configuration document referenced by a manifest's config digest.
///
/// This is the "config blob" (distinct from layer blobs): architecture,
/// runtime configuration, build history and root filesystem layer IDs.
/// Pass-through DTO matching the registry's published document shape.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigBlob {
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub config: ContainerConfig,
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub container_config: ContainerConfig,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub docker_version: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub rootfs: RootFs,
}

/// Container runtime configuration embedded in the image config.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContainerConfig {
    #[serde(rename = "Hostname", default)]
    pub hostname: String,
    #[serde(rename = "Domainname", default)]
    pub domainname: String,
    #[serde(rename = "User", default)]
    pub user: String,
    #[serde(rename = "ExposedPorts", default)]
    pub exposed_ports: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "Env", default)]
    pub env: Option<Vec<String>>,
    #[serde(rename = "Cmd", default)]
    pub cmd: Option<Vec<String>>,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Volumes", default)]
    pub volumes: Option<serde_json::Value>,
    #[serde(rename = "WorkingDir", default)]
    pub working_dir: String,
    #[serde(rename = "Entrypoint", default)]
    pub entrypoint: Option<Vec<String>>,
    #[serde(rename = "Labels", default)]
    pub labels: Option<HashMap<String, String>>,
}

/// Single image build step.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub empty_layer: bool,
}

/// Root filesystem section of the image config.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RootFs {
    #[serde(rename = "type", default)]
    pub fs_type: String,
    #[serde(default)]
    pub diff_ids: Vec<String>,
}

impl Client {
    /// Retrieve the image configuration blob for a digest.
    pub async fn get_config_blob(&self, name: &str, digest: &str) -> Result<ConfigBlob> {
        let name = super::unescape(name)?;
        let url = Url::parse(&format!("{}/v2/{}/blobs/{}", self.base_url, name, digest))?;
        self.fetch_json(url).await
    }
}
