use bytes::Bytes;

/// 对单个分片响应体做窗口裁剪：先跳过 `skip` 字节，再最多放行 `remaining` 字节。
///
/// 分片存储遵守子区间请求时 `skip` 为 0；存储忽略 Range 返回整块时，用分片内偏移作为 `skip` 在本地裁剪。
#[derive(Debug, Clone)]
pub struct BodyWindow {
    skip: u64,
    remaining: u64,
    received: u64,
}

/// 一帧数据经过窗口后的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taken {
    /// 需要转发给客户端的部分，可能为空。
    pub bytes: Bytes,
    /// 窗口之后多出来的字节数。
    pub excess: u64,
}

impl BodyWindow {
    pub fn new(skip: u64, len: u64) -> Self {
        Self {
            skip,
            remaining: len,
            received: 0,
        }
    }

    pub fn take(&mut self, mut frame: Bytes) -> Taken {
        self.received += frame.len() as u64;

        if self.skip > 0 {
            let skipped = self.skip.min(frame.len() as u64);
            frame = frame.slice(skipped as usize..);
            self.skip -= skipped;
        }

        let keep = self.remaining.min(frame.len() as u64);
        let excess = frame.len() as u64 - keep;
        frame.truncate(keep as usize);
        self.remaining -= keep;

        Taken {
            bytes: frame,
            excess,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skip == 0 && self.remaining == 0
    }

    /// 响应体累计收到的字节数（含被跳过和多出的部分）。
    pub fn received(&self) -> u64 {
        self.received
    }
}
