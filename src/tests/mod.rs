//! 测试模块入口：公共逻辑（模拟上游、样例数据）在 `lib` 子模块，场景测试在 `internal`。

pub use lib::*;
