//! 区间领域模块：解析客户端 Range 请求头，并把全局字节区间映射到分片窗口。
//!
//! 对外导出以 [`crate::range`] 为准，此处仅做模块划分。

pub mod error;
pub mod functions;
pub mod structs;
