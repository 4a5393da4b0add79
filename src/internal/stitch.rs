//! 分片拼接领域模块：按顺序拉取分片，把各分片（或其子区间）拼成一条连续字节流。
//!
//! ## 流程
//!
//! 1. `plan_chunk_requests`：根据分片窗口生成拉取计划，只有首/尾分片带子区间；
//! 2. `spawn_stitch`：启动生产者任务，逐个分片顺序请求，边收边写入有界通道；
//! 3. 通道的接收端作为 HTTP 响应体，客户端在后续分片仍在请求时即可开始接收。
//!
//! 任一分片失败都会以错误项结束输出流，不会静默截断；客户端断开后生产者停止拉取后续分片。

pub mod error;
pub mod functions;
pub mod structs;
