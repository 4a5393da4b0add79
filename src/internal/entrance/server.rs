//! 路由与共享状态。

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use reqwest::Client;
use tokio::net::TcpListener;

use crate::internal::config::error::ConfigError;
use crate::internal::config::structs::ServerConfig;
use crate::internal::manifest::impl_traits::{FileManifestSource, HttpManifestSource};
use crate::internal::manifest::traits::ManifestSource;

use super::dispatcher::{missing_name, range_get, stream_get};
use super::error::{ApiError, ServeError};

/// 各请求共享的只读状态；每个请求自己的分片描述、区间与输出流互不共享。
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub client: Client,
    pub manifest: Arc<dyn ManifestSource>,
}

impl AppState {
    /// 按配置选择清单来源：设置了本地清单文件时读文件，否则请求上游。
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        let client = config.build_client()?;
        let manifest: Arc<dyn ManifestSource> = match &config.manifest_file {
            Some(path) => Arc::new(FileManifestSource::new(path.clone())),
            None => Arc::new(HttpManifestSource::new(
                client.clone(),
                config.manifest_path.clone(),
            )),
        };

        Ok(Self {
            config,
            client,
            manifest,
        })
    }

    /// 替换清单来源。
    pub fn with_manifest_source(mut self, source: impl ManifestSource + 'static) -> Self {
        self.manifest = Arc::new(source);
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/stream/*name", get(stream_get))
        .route("/range/*name", get(range_get))
        .route("/stream", get(missing_name))
        .route("/range", get(missing_name))
        .fallback(fallback)
        .with_state(Arc::new(state))
}

/// `/stream/`、`/range/` 这类文件名为空的路径不会命中通配路由，在这里补成 400。
async fn fallback(uri: Uri) -> Response {
    match uri.path().trim_end_matches('/') {
        "/stream" | "/range" => missing_name().await.into_response(),
        _ => ApiError::NotFound.into_response(),
    }
}

/// 绑定监听地址并运行服务，直到出错退出。
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|_| ServeError::InvalidBind(config.bind.clone()))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(
        bind = %addr,
        origin = ?config.origin.as_ref().map(|u| u.as_str()),
        manifest_file = ?config.manifest_file,
        "chunk-stream listening"
    );

    let state = AppState::new(config)?;
    axum::serve(listener, app(state))
        .await
        .map_err(ServeError::Serve)
}
