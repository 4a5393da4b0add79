//! 启动拼接生产者任务，返回由有界通道驱动的输出流。

use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::Stream;
use reqwest::Client;
use tokio::sync::mpsc::{self, Sender};

use crate::internal::stitch::error::StitchError;
use crate::internal::stitch::structs::ChunkRequest;

use super::forward_chunk::{forward_chunk, ForwardChunkParams};

/// 输出流中的一项：一段字节，或终止整条流的错误。
pub type StitchItem = Result<Bytes, StitchError>;

/// 拼接后的输出流，可直接作为 HTTP 响应体。
pub type StitchStream = Pin<Box<dyn Stream<Item = StitchItem> + Send>>;

/// 启动拼接任务时的参数。
pub struct SpawnStitchParams {
    pub client: Client,
    pub file_name: String,
    pub requests: Vec<ChunkRequest>,
    /// 通道容量，决定最多缓存多少帧尚未被客户端取走的数据。
    pub channel_capacity: usize,
}

/// 立即返回输出流，分片在后台任务中按顺序拉取并写入。
///
/// 生产者任务退出时发送端随之释放，输出流恰好结束一次（成功、出错、客户端断开皆然）。
pub fn spawn_stitch(params: SpawnStitchParams) -> StitchStream {
    let (sender, mut receiver) = mpsc::channel(params.channel_capacity.max(1));

    tokio::spawn(run_stitch(
        params.client,
        params.file_name,
        params.requests,
        sender,
    ));

    Box::pin(async_stream::stream! {
        while let Some(item) = receiver.recv().await {
            yield item;
        }
    })
}

async fn run_stitch(
    client: Client,
    file_name: String,
    requests: Vec<ChunkRequest>,
    sender: Sender<StitchItem>,
) {
    for request in &requests {
        tracing::debug!(
            file = %file_name,
            index = request.index,
            url = %request.location,
            range = ?request.range.map(|r| r.header_value()),
            "fetching chunk"
        );

        let result = forward_chunk(ForwardChunkParams {
            client: &client,
            request,
            sender: &sender,
        })
        .await;

        match result {
            Ok(()) => {}
            Err(StitchError::ClientGone) => {
                tracing::warn!(
                    file = %file_name,
                    index = request.index,
                    "client disconnected, remaining chunks skipped"
                );
                return;
            }
            Err(err) => {
                tracing::warn!(file = %file_name, error = %err, "chunk stream aborted");
                let _ = sender.send(Err(err)).await;
                return;
            }
        }
    }

    tracing::debug!(file = %file_name, chunks = requests.len(), "all chunks forwarded");
}
