//! 解析客户端 `Range: bytes=<start>-<end>` 请求头。

use crate::internal::range::error::RangeError;
use crate::internal::range::structs::ByteInterval;

/// 解析 Range 请求头，并按文件总大小校验。
///
/// - 起点缺省为 `0`，终点缺省为 `total_size - 1`（`bytes=-N` 同样按起点缺省处理）；
/// - 语法不符（非 bytes 单位、多段区间、非数字等）返回 `Ok(None)`，由调用方按整文件下载处理；
/// - 区间倒置、终点越界、空文件或数值溢出返回 [`RangeError::NotSatisfiable`]。
pub fn parse_range_header(
    header_value: &str,
    total_size: u64,
) -> Result<Option<ByteInterval>, RangeError> {
    let Some((start_s, end_s)) = split_byte_range(header_value) else {
        return Ok(None);
    };

    let not_satisfiable = RangeError::NotSatisfiable { total_size };

    let start = if start_s.is_empty() {
        0
    } else {
        start_s.parse::<u64>().map_err(|_| not_satisfiable.clone())?
    };

    let end = if end_s.is_empty() {
        total_size.checked_sub(1).ok_or_else(|| not_satisfiable.clone())?
    } else {
        end_s.parse::<u64>().map_err(|_| not_satisfiable.clone())?
    };

    if start > end || end >= total_size {
        return Err(not_satisfiable);
    }

    Ok(Some(ByteInterval { start, end }))
}

/// 拆出 `bytes=` 之后的起止两段，两段都只能是（可为空的）十进制数字。
fn split_byte_range(header_value: &str) -> Option<(&str, &str)> {
    let (unit, ranges) = header_value.trim().split_once('=')?;
    if !unit.trim().eq_ignore_ascii_case("bytes") {
        return None;
    }

    let (start_s, end_s) = ranges.trim().split_once('-')?;
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(start_s) || !is_digits(end_s) {
        return None;
    }

    Some((start_s, end_s))
}
