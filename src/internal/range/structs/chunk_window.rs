use std::ops::RangeInclusive;

/// 一个字节区间落在哪些分片上：首/尾分片下标，以及区间在首/尾分片内的偏移（均为闭区间端点）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkWindow {
    pub first_chunk_index: usize,
    pub first_chunk_offset: u64,
    pub last_chunk_index: usize,
    pub last_chunk_offset: u64,
}

impl ChunkWindow {
    pub fn is_single_chunk(&self) -> bool {
        self.first_chunk_index == self.last_chunk_index
    }

    /// 需要拉取的分片下标，窗口外的分片不会被访问。
    pub fn chunk_indices(&self) -> RangeInclusive<usize> {
        self.first_chunk_index..=self.last_chunk_index
    }
}
