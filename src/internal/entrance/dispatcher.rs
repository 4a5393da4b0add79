//! 请求分发：解析文件名 → 取清单 → 区间 / 整文件分支 → 组装响应。

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Host, Path as AxumPath, State};
use axum::http::header::{
    ACCEPT_RANGES, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE,
};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::internal::config::structs::server_config::format_origin;
use crate::internal::manifest::structs::FileDescriptor;
use crate::internal::range::functions::{parse_range_header, resolve_chunk_window};
use crate::internal::range::structs::ByteInterval;
use crate::internal::stitch::functions::{
    plan_full_requests, plan_range_requests, spawn_stitch, SpawnStitchParams,
};
use crate::internal::stitch::structs::ChunkRequest;

use super::error::{ApiError, MISSING_NAME};
use super::server::AppState;

const OCTET_STREAM: &str = "application/octet-stream";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// `filename*` 中保留原样的字符之外全部百分号编码。
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_');

/// 路由类型：`/stream` 只做整文件下载，`/range` 会读取 Range 请求头。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Stream,
    Range,
}

pub async fn stream_get(
    State(state): State<Arc<AppState>>,
    AxumPath(name): AxumPath<String>,
    method: Method,
    host: Option<Host>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    dispatch(
        &state,
        DispatchParams {
            name: &name,
            headers: &headers,
            host: host.as_ref().map(|Host(h)| h.as_str()),
            kind: RouteKind::Stream,
            head_only: method == Method::HEAD,
        },
    )
    .await
}

pub async fn range_get(
    State(state): State<Arc<AppState>>,
    AxumPath(name): AxumPath<String>,
    method: Method,
    host: Option<Host>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    dispatch(
        &state,
        DispatchParams {
            name: &name,
            headers: &headers,
            host: host.as_ref().map(|Host(h)| h.as_str()),
            kind: RouteKind::Range,
            head_only: method == Method::HEAD,
        },
    )
    .await
}

pub async fn missing_name() -> ApiError {
    ApiError::BadRequest(MISSING_NAME)
}

/// 分发单个请求时的参数。
pub struct DispatchParams<'a> {
    /// 路由通配部分，可能带前导 `/`。
    pub name: &'a str,
    pub headers: &'a HeaderMap,
    /// 请求的主机名，HTTP/1 取自 `Host`，HTTP/2 取自 `:authority`。
    pub host: Option<&'a str>,
    pub kind: RouteKind,
    /// HEAD 请求只返回响应头，不拉取分片。
    pub head_only: bool,
}

/// 单个请求的完整处理流程。推流开始前的任何错误都在这里变成对应的状态码。
pub async fn dispatch(state: &AppState, params: DispatchParams<'_>) -> Result<Response, ApiError> {
    let name = params.name.trim_start_matches('/');
    if name.is_empty() {
        return Err(ApiError::BadRequest(MISSING_NAME));
    }

    let origin = resolve_origin(state, &params)?;
    let descriptor = state
        .manifest
        .describe(&origin, name)
        .await?
        .ok_or(ApiError::NotFound)?;

    let range_header = match params.kind {
        RouteKind::Range => params.headers.get(RANGE).and_then(|v| v.to_str().ok()),
        RouteKind::Stream => None,
    };

    let interval = match range_header {
        Some(value) => parse_range_header(value, descriptor.total_size)?,
        None => None,
    };

    match interval {
        Some(interval) => range_response(state, descriptor, interval, params.head_only),
        None => full_response(state, descriptor, params.head_only),
    }
}

/// 上游源站：优先使用配置，否则按客户端请求的主机与协议推导（与本服务同源部署时）。
fn resolve_origin(state: &AppState, params: &DispatchParams<'_>) -> Result<Url, ApiError> {
    if let Some(origin) = &state.config.origin {
        return Ok(origin.clone());
    }

    let host = params
        .host
        .filter(|h| !h.trim().is_empty())
        .ok_or(ApiError::BadRequest("缺少 Host 请求头"))?;

    request_origin(host, params.headers).ok_or(ApiError::BadRequest("Host 请求头无效"))
}

/// 用请求自身的协议与主机拼出源站。协议取 `X-Forwarded-Proto` 的第一项，缺省为 `http`。
pub fn request_origin(host: &str, headers: &HeaderMap) -> Option<Url> {
    let scheme = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    format_origin(&format!("{scheme}://{}/", host.trim()))
}

fn range_response(
    state: &AppState,
    descriptor: FileDescriptor,
    interval: ByteInterval,
    head_only: bool,
) -> Result<Response, ApiError> {
    let window = resolve_chunk_window(interval, &descriptor.chunk_sizes)?;
    tracing::debug!(
        file = %descriptor.name,
        start = interval.start,
        end = interval.end,
        first_chunk = window.first_chunk_index,
        last_chunk = window.last_chunk_index,
        "serving range"
    );

    let body = if head_only {
        Body::empty()
    } else {
        stitched_body(state, &descriptor, plan_range_requests(&descriptor, &window))
    };

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(CONTENT_TYPE, OCTET_STREAM)
        .header(CONTENT_DISPOSITION, content_disposition(&descriptor.name))
        .header(CONTENT_RANGE, interval.content_range(descriptor.total_size))
        .header(CONTENT_LENGTH, interval.length())
        .header(ACCEPT_RANGES, "bytes")
        .body(body)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

fn full_response(
    state: &AppState,
    descriptor: FileDescriptor,
    head_only: bool,
) -> Result<Response, ApiError> {
    tracing::debug!(
        file = %descriptor.name,
        size = descriptor.total_size,
        chunks = descriptor.chunk_count(),
        "serving full file"
    );

    let body = if head_only {
        Body::empty()
    } else {
        stitched_body(state, &descriptor, plan_full_requests(&descriptor))
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, OCTET_STREAM)
        .header(CONTENT_DISPOSITION, content_disposition(&descriptor.name))
        .header(CONTENT_LENGTH, descriptor.total_size)
        .header(ACCEPT_RANGES, "bytes")
        .body(body)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

fn stitched_body(
    state: &AppState,
    descriptor: &FileDescriptor,
    requests: Vec<ChunkRequest>,
) -> Body {
    Body::from_stream(spawn_stitch(SpawnStitchParams {
        client: state.client.clone(),
        file_name: descriptor.name.clone(),
        requests,
        channel_capacity: state.config.channel_capacity,
    }))
}

/// `attachment; filename=<name>`；文件名含空格、引号或非 ASCII 字符时改用 RFC 5987 的 `filename*`。
pub fn content_disposition(name: &str) -> String {
    let is_plain = name
        .bytes()
        .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b';' | b',' | b'\\'));

    if is_plain {
        format!("attachment; filename={name}")
    } else {
        format!(
            "attachment; filename*=UTF-8''{}",
            utf8_percent_encode(name, FILENAME_ENCODE_SET)
        )
    }
}
