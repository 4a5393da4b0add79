//! 清单相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("无法获取文件列表: {0}")]
    Request(#[from] reqwest::Error),

    #[error("无法获取文件列表，状态码: {0}")]
    Status(reqwest::StatusCode),

    #[error("读取本地文件列表失败: {0}")]
    ReadFile(std::io::Error),

    #[error("配置文件格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("清单地址无效: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// 条目存在但形状或数值不合法（分片数不一致、大小合计不符、出现空分片等）。
    #[error("文件 {name} 的分片描述损坏: {reason}")]
    Corrupt { name: String, reason: String },
}
