//! 生成分片拉取计划。

use crate::internal::manifest::structs::FileDescriptor;
use crate::internal::range::structs::ChunkWindow;
use crate::internal::stitch::structs::{ChunkRange, ChunkRequest};

/// 整文件：按顺序拉取全部分片，均不带子区间。
pub fn plan_full_requests(descriptor: &FileDescriptor) -> Vec<ChunkRequest> {
    descriptor
        .chunk_locations
        .iter()
        .zip(&descriptor.chunk_sizes)
        .enumerate()
        .map(|(index, (location, &size))| ChunkRequest {
            index,
            location: location.clone(),
            range: None,
            expected_len: size,
        })
        .collect()
}

/// 区间请求：只拉取窗口内的分片。
///
/// - 单分片窗口：`[first_offset, last_offset]`
/// - 多分片时首分片：`[first_offset, 分片末尾)`
/// - 中间分片：整块
/// - 多分片时尾分片：`[0, last_offset]`
pub fn plan_range_requests(
    descriptor: &FileDescriptor,
    window: &ChunkWindow,
) -> Vec<ChunkRequest> {
    window
        .chunk_indices()
        .filter_map(|index| {
            let location = descriptor.chunk_locations.get(index)?;
            let size = *descriptor.chunk_sizes.get(index)?;
            Some((index, location, size))
        })
        .map(|(index, location, size)| {
            let range = if window.is_single_chunk() {
                Some(ChunkRange::Bounded {
                    start: window.first_chunk_offset,
                    end: window.last_chunk_offset,
                })
            } else if index == window.first_chunk_index {
                Some(ChunkRange::From {
                    start: window.first_chunk_offset,
                })
            } else if index == window.last_chunk_index {
                Some(ChunkRange::Bounded {
                    start: 0,
                    end: window.last_chunk_offset,
                })
            } else {
                None
            };

            let expected_len = match range {
                Some(r) => r.expected_len(size),
                None => size,
            };

            ChunkRequest {
                index,
                location: location.clone(),
                range,
                expected_len,
            }
        })
        .collect()
}
