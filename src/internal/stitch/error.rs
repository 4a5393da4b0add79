//! 分片拼接相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StitchError {
    #[error("分片 {index} 请求失败: {source}")]
    Request {
        index: usize,
        source: reqwest::Error,
    },

    #[error("分片 {index} 获取失败，状态码: {status}")]
    Status {
        index: usize,
        status: reqwest::StatusCode,
    },

    #[error("分片 {index} 读取失败: {source}")]
    Body {
        index: usize,
        source: reqwest::Error,
    },

    #[error("分片 {index} 长度不符：预期 {expected} 字节，实际收到 {actual} 字节")]
    LengthMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },

    /// 输出流的接收端已关闭（客户端断开）。
    #[error("客户端已断开")]
    ClientGone,
}
