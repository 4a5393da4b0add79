use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::internal::manifest::error::ManifestError;

/// 清单文档：`{ "files": { "<name>": { "chunks": [...], "metadata": {...} } } }`。
///
/// 条目先以原始 JSON 保存，查询时才解析，单个坏条目不会拖垮整份清单。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub files: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// 分片地址，相对上游源站的路径或完整 URL，按顺序排列。
    pub chunks: Vec<String>,
    pub metadata: ManifestMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestMetadata {
    pub size: u64,
    #[serde(rename = "chunksSize")]
    pub chunks_size: Vec<u64>,
}

impl Manifest {
    /// 按文件名取条目；不存在返回 `Ok(None)`，存在但无法解析返回 [`ManifestError::Corrupt`]。
    pub fn entry(&self, name: &str) -> Result<Option<ManifestEntry>, ManifestError> {
        let Some(raw) = self.files.get(name) else {
            return Ok(None);
        };

        serde_json::from_value(raw.clone())
            .map(Some)
            .map_err(|e| ManifestError::Corrupt {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}
