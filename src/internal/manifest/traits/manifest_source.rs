//! 清单来源 trait：HTTP 清单服务与本地清单文件共用同一接口。

use async_trait::async_trait;
use url::Url;

use crate::internal::manifest::error::ManifestError;
use crate::internal::manifest::structs::{FileDescriptor, Manifest};

#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// 取回完整清单。`origin` 为本次请求对应的上游源站。
    async fn fetch(&self, origin: &Url) -> Result<Manifest, ManifestError>;

    /// 取回清单并解析出指定文件的分片描述；文件不在清单中返回 `Ok(None)`。
    async fn describe(
        &self,
        origin: &Url,
        name: &str,
    ) -> Result<Option<FileDescriptor>, ManifestError> {
        let manifest = self.fetch(origin).await?;
        match manifest.entry(name)? {
            Some(entry) => FileDescriptor::from_entry(name, entry, origin).map(Some),
            None => Ok(None),
        }
    }
}
