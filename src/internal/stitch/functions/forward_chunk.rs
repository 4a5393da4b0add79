//! 把单个分片的响应体逐帧转发到输出通道。

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc::Sender;

use crate::internal::stitch::error::StitchError;
use crate::internal::stitch::structs::{BodyWindow, ChunkRequest};

use super::fetch_chunk::{fetch_chunk_response, FetchChunkParams};
use super::spawn_stitch::StitchItem;

/// 转发单个分片时的参数。
pub struct ForwardChunkParams<'a> {
    pub client: &'a Client,
    pub request: &'a ChunkRequest,
    pub sender: &'a Sender<StitchItem>,
}

/// 请求分片并流式转发，收到一帧转发一帧；转发字节数必须与计划一致。
///
/// 请求了子区间但存储返回非 206 的成功状态时，按分片内偏移在本地裁剪整块响应。
pub async fn forward_chunk(params: ForwardChunkParams<'_>) -> Result<(), StitchError> {
    if params.sender.is_closed() {
        return Err(StitchError::ClientGone);
    }

    let request = params.request;
    let resp = fetch_chunk_response(FetchChunkParams {
        client: params.client,
        request,
    })
    .await?;

    let trim_locally = request.range.is_some() && resp.status() != StatusCode::PARTIAL_CONTENT;
    let skip = match (trim_locally, request.range) {
        (true, Some(range)) => range.start(),
        _ => 0,
    };
    let expected_body = skip + request.expected_len;

    let mut window = BodyWindow::new(skip, request.expected_len);
    let mut stream = resp.bytes_stream();

    while let Some(frame) = stream.next().await {
        let frame = frame.map_err(|source| StitchError::Body {
            index: request.index,
            source,
        })?;

        let taken = window.take(frame);
        if taken.excess > 0 && !trim_locally {
            return Err(StitchError::LengthMismatch {
                index: request.index,
                expected: expected_body,
                actual: window.received(),
            });
        }

        if !taken.bytes.is_empty() {
            params
                .sender
                .send(Ok(taken.bytes))
                .await
                .map_err(|_| StitchError::ClientGone)?;
        }

        if trim_locally && window.is_complete() {
            break;
        }
    }

    if !window.is_complete() {
        return Err(StitchError::LengthMismatch {
            index: request.index,
            expected: expected_body,
            actual: window.received(),
        });
    }

    Ok(())
}
