use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT_ENCODING;
use url::Url;

use crate::internal::manifest::error::ManifestError;
use crate::internal::manifest::structs::Manifest;
use crate::internal::manifest::traits::ManifestSource;

/// 从上游源站的固定路径（默认 `config.json`）获取清单。
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    pub client: Client,
    pub manifest_path: String,
}

impl HttpManifestSource {
    pub fn new(client: Client, manifest_path: impl Into<String>) -> Self {
        Self {
            client,
            manifest_path: manifest_path.into(),
        }
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch(&self, origin: &Url) -> Result<Manifest, ManifestError> {
        let url = origin.join(&self.manifest_path)?;
        tracing::debug!(url = %url, "fetching manifest");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT_ENCODING, "identity")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ManifestError::Status(status));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
