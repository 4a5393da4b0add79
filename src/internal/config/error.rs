//! 配置相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("环境变量 {var} 的值无效: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("创建 HTTP 客户端失败: {0}")]
    Client(#[from] reqwest::Error),
}
