//! 服务配置：从环境变量读取监听地址、上游源站、清单位置与输出通道容量。

pub mod error;
pub mod structs;
