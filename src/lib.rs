/// 内部实现模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出服务入口
pub use internal::entrance::server::{app, serve, AppState};

pub mod config {
    use crate::internal;
    pub use internal::config::error::ConfigError;
    pub use internal::config::structs::server_config::*;
}

/// 清单：文件名到分片列表的映射，以及校验后的分片描述
pub mod manifest {
    use crate::internal;
    pub use internal::manifest::error::ManifestError;
    pub use internal::manifest::impl_traits::*;
    pub use internal::manifest::structs::*;
    pub use internal::manifest::traits::*;
}

/// 区间解析与分片窗口计算，不依赖网络，可单独使用
pub mod range {
    use crate::internal;
    pub use internal::range::error::RangeError;
    pub use internal::range::functions::*;
    pub use internal::range::structs::*;
}

pub mod stitch {
    use crate::internal;
    pub use internal::stitch::error::StitchError;
    pub use internal::stitch::functions::*;
    pub use internal::stitch::structs::*;
}

pub mod entrance {
    use crate::internal;
    pub use internal::entrance::dispatcher::{
        content_disposition, dispatch, request_origin, DispatchParams, RouteKind,
    };
    pub use internal::entrance::error::{ApiError, ServeError, MISSING_NAME};
}
