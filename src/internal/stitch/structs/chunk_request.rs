use url::Url;

use super::chunk_range::ChunkRange;

/// 拉取计划中的一项：哪个分片、是否带子区间、应当转发多少字节。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRequest {
    pub index: usize,
    pub location: Url,
    pub range: Option<ChunkRange>,
    pub expected_len: u64,
}
