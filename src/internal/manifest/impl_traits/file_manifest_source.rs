use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::internal::manifest::error::ManifestError;
use crate::internal::manifest::structs::Manifest;
use crate::internal::manifest::traits::ManifestSource;

/// 从本地 JSON 文件读取清单；每次请求重新读取，文件更新后立即生效。
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    pub path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestSource for FileManifestSource {
    async fn fetch(&self, _origin: &Url) -> Result<Manifest, ManifestError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(ManifestError::ReadFile)?;
        Ok(serde_json::from_slice(&content)?)
    }
}
