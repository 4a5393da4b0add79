/// 文件内的闭区间 `[start, end]`，满足 `start <= end < total_size`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteInterval {
    pub start: u64,
    pub end: u64,
}

impl ByteInterval {
    /// 区间包含的字节数。
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// 响应头 `Content-Range` 的取值：`bytes <start>-<end>/<total>`。
    pub fn content_range(&self, total_size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, total_size)
    }
}
