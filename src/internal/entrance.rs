//! HTTP 入口：路由、请求分发与响应头整形。

pub mod dispatcher;
pub mod error;
pub mod server;
