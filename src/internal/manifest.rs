//! 清单领域模块：从清单服务取回文件列表，并把单个文件条目校验为强类型的 [`FileDescriptor`]。
//!
//! 清单每次请求都重新获取，不做缓存。
//!
//! [`FileDescriptor`]: structs::FileDescriptor

pub mod error;
pub mod impl_traits;
pub mod structs;
pub mod traits;
