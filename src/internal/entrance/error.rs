//! 对客户端可见的错误，以及服务启动错误。

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::header::{ACCEPT_RANGES, CONTENT_RANGE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::internal::config::error::ConfigError;
use crate::internal::manifest::error::ManifestError;
use crate::internal::range::error::RangeError;

/// 缺少文件名时的响应体
pub const MISSING_NAME: &str = "缺少文件名参数";

/// 请求处理过程中的错误，统一映射为状态码与响应体。
///
/// 开始推流之后的分片错误不经过这里，而是作为输出流的错误项中断响应。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("404 not found")]
    NotFound,

    #[error("Range Not Satisfiable")]
    RangeNotSatisfiable { total_size: u64 },

    #[error(transparent)]
    Upstream(#[from] ManifestError),

    #[error("Server Error: {0}")]
    Internal(String),
}

impl From<RangeError> for ApiError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::NotSatisfiable { total_size } => Self::RangeNotSatisfiable { total_size },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "404 not found" })),
            )
                .into_response(),
            Self::RangeNotSatisfiable { total_size } => Response::builder()
                .status(StatusCode::RANGE_NOT_SATISFIABLE)
                .header(ACCEPT_RANGES, "bytes")
                .header(CONTENT_RANGE, format!("bytes */{total_size}"))
                .body(Body::from("Range Not Satisfiable"))
                .unwrap_or_else(|_| StatusCode::RANGE_NOT_SATISFIABLE.into_response()),
            Self::Upstream(err) => {
                tracing::error!(error = %err, "manifest lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server Error: {msg}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("监听地址无效: {0}")]
    InvalidBind(String),

    #[error("绑定 {addr} 失败: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("服务运行出错: {0}")]
    Serve(std::io::Error),
}
