//! 前缀和扫描：把全局字节区间映射为首/尾分片及其内部偏移。

use crate::internal::range::error::RangeError;
use crate::internal::range::structs::{ByteInterval, ChunkWindow};

/// 从左到右累加分片大小，找到 `start` 与 `end` 所在的分片；找到尾分片即停止扫描。
///
/// 只做一次顺序遍历，不需要随机访问分片表。
pub fn resolve_chunk_window(
    interval: ByteInterval,
    chunk_sizes: &[u64],
) -> Result<ChunkWindow, RangeError> {
    let mut acc: u64 = 0;
    let mut first: Option<(usize, u64)> = None;

    for (index, &size) in chunk_sizes.iter().enumerate() {
        let next = acc.saturating_add(size);

        if first.is_none() && interval.start >= acc && interval.start < next {
            first = Some((index, interval.start - acc));
        }

        if interval.end >= acc && interval.end < next {
            if let Some((first_chunk_index, first_chunk_offset)) = first {
                return Ok(ChunkWindow {
                    first_chunk_index,
                    first_chunk_offset,
                    last_chunk_index: index,
                    last_chunk_offset: interval.end - acc,
                });
            }
            break;
        }

        acc = next;
    }

    Err(RangeError::OutOfBounds {
        start: interval.start,
        end: interval.end,
    })
}
