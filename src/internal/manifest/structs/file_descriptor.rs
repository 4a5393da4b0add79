use url::Url;

use crate::internal::manifest::error::ManifestError;

use super::manifest::ManifestEntry;

/// 单个逻辑文件的分片描述，每次请求从清单条目重新构建，构建后不再修改。
///
/// 构建时已保证：分片地址与分片大小一一对应、大小之和等于 `total_size`、不存在空分片。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub chunk_locations: Vec<Url>,
    pub total_size: u64,
    pub chunk_sizes: Vec<u64>,
}

impl FileDescriptor {
    /// 校验清单条目，并将相对分片路径解析到上游源站下（完整 URL 原样保留）。
    pub fn from_entry(
        name: &str,
        entry: ManifestEntry,
        origin: &Url,
    ) -> Result<Self, ManifestError> {
        let corrupt = |reason: String| ManifestError::Corrupt {
            name: name.to_string(),
            reason,
        };

        let ManifestEntry { chunks, metadata } = entry;

        if chunks.len() != metadata.chunks_size.len() {
            return Err(corrupt(format!(
                "分片数 {} 与分片大小数 {} 不一致",
                chunks.len(),
                metadata.chunks_size.len()
            )));
        }

        if let Some(index) = metadata.chunks_size.iter().position(|size| *size == 0) {
            return Err(corrupt(format!("分片 {index} 大小为 0")));
        }

        let sum = metadata
            .chunks_size
            .iter()
            .try_fold(0u64, |acc, size| acc.checked_add(*size))
            .ok_or_else(|| corrupt("分片大小合计溢出".to_string()))?;
        if sum != metadata.size {
            return Err(corrupt(format!(
                "分片大小合计 {sum} 与文件大小 {} 不符",
                metadata.size
            )));
        }

        let chunk_locations = chunks
            .iter()
            .map(|chunk| {
                origin
                    .join(chunk)
                    .map_err(|e| corrupt(format!("分片地址 {chunk} 无效: {e}")))
            })
            .collect::<Result<Vec<Url>, ManifestError>>()?;

        Ok(Self {
            name: name.to_string(),
            chunk_locations,
            total_size: metadata.size,
            chunk_sizes: metadata.chunks_size,
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.chunk_locations.len()
    }
}
