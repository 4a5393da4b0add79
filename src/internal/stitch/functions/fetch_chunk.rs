//! 发起单个分片请求，返回响应供流式读取。

use reqwest::header::{ACCEPT_ENCODING, RANGE};
use reqwest::{Client, Response};

use crate::internal::stitch::error::StitchError;
use crate::internal::stitch::structs::ChunkRequest;

/// 发起分片请求时的参数。
pub struct FetchChunkParams<'a> {
    pub client: &'a Client,
    pub request: &'a ChunkRequest,
}

/// 请求单个分片。始终带 `Accept-Encoding: identity`，保证字节数与清单声明一致；
/// 200 与 206 都视为成功，其它状态码返回 [`StitchError::Status`]。
pub async fn fetch_chunk_response(
    params: FetchChunkParams<'_>,
) -> Result<Response, StitchError> {
    let index = params.request.index;

    let mut builder = params
        .client
        .get(params.request.location.clone())
        .header(ACCEPT_ENCODING, "identity");
    if let Some(range) = params.request.range {
        builder = builder.header(RANGE, range.header_value());
    }

    let resp = builder
        .send()
        .await
        .map_err(|source| StitchError::Request { index, source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(StitchError::Status { index, status });
    }

    Ok(resp)
}
