//! 区间相关错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// 区间倒置、越界或文件为空；调用方需返回 416 并带上 `Content-Range: bytes */<total_size>`。
    #[error("Range Not Satisfiable（文件大小 {total_size} 字节）")]
    NotSatisfiable { total_size: u64 },

    /// 分片表无法覆盖该区间，说明分片描述与区间校验不一致。
    #[error("区间 {start}-{end} 超出分片表覆盖范围")]
    OutOfBounds { start: u64, end: u64 },
}
