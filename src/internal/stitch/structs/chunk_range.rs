/// 对单个分片发起的子区间请求，偏移相对分片自身。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkRange {
    /// `bytes=<start>-<end>`，闭区间。
    Bounded { start: u64, end: u64 },
    /// `bytes=<start>-`，从偏移读到分片末尾。
    From { start: u64 },
}

impl ChunkRange {
    pub fn start(&self) -> u64 {
        match *self {
            Self::Bounded { start, .. } | Self::From { start } => start,
        }
    }

    /// 该子区间在大小为 `chunk_size` 的分片中覆盖的字节数。
    pub fn expected_len(&self, chunk_size: u64) -> u64 {
        match *self {
            Self::Bounded { start, end } => end - start + 1,
            Self::From { start } => chunk_size.saturating_sub(start),
        }
    }

    /// 发往分片存储的 `Range` 请求头。
    pub fn header_value(&self) -> String {
        match *self {
            Self::Bounded { start, end } => format!("bytes={start}-{end}"),
            Self::From { start } => format!("bytes={start}-"),
        }
    }
}
