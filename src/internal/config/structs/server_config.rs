use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::internal::config::error::ConfigError;

/// 默认监听地址
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// 默认清单路径（相对上游源站）
pub const DEFAULT_MANIFEST_PATH: &str = "config.json";

/// 默认输出通道容量（帧数）
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

pub const ENV_BIND: &str = "CHUNK_STREAM_BIND";
pub const ENV_ORIGIN: &str = "CHUNK_STREAM_ORIGIN";
pub const ENV_MANIFEST_PATH: &str = "CHUNK_STREAM_MANIFEST_PATH";
pub const ENV_MANIFEST_FILE: &str = "CHUNK_STREAM_MANIFEST_FILE";
pub const ENV_CHANNEL_CAPACITY: &str = "CHUNK_STREAM_CHANNEL_CAPACITY";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CHUNK_STREAM_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    /// 上游源站，清单与相对分片路径都基于它解析；未设置时取客户端请求的 Host。
    pub origin: Option<Url>,
    pub manifest_path: String,
    /// 设置后从本地文件读取清单，不再请求上游。
    pub manifest_file: Option<PathBuf>,
    pub channel_capacity: usize,
    pub connect_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            origin: None,
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            manifest_file: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            connect_timeout: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// 用任意键值来源构建配置，空字符串视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(bind) = get(ENV_BIND) {
            cfg.bind = bind;
        }

        if let Some(origin) = get(ENV_ORIGIN) {
            cfg.origin = Some(format_origin(&origin).ok_or(ConfigError::InvalidEnv {
                var: ENV_ORIGIN,
                value: origin,
            })?);
        }

        if let Some(path) = get(ENV_MANIFEST_PATH) {
            cfg.manifest_path = path.trim_start_matches('/').to_string();
        }

        cfg.manifest_file = get(ENV_MANIFEST_FILE).map(PathBuf::from);

        if let Some(raw) = get(ENV_CHANNEL_CAPACITY) {
            cfg.channel_capacity = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidEnv {
                    var: ENV_CHANNEL_CAPACITY,
                    value: raw,
                })?;
        }

        if let Some(raw) = get(ENV_CONNECT_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_CONNECT_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            cfg.connect_timeout = Some(Duration::from_secs(secs));
        }

        Ok(cfg)
    }

    /// 构建访问清单与分片存储共用的 HTTP 客户端。
    pub fn build_client(&self) -> Result<Client, ConfigError> {
        let mut builder = Client::builder().http1_only();
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// 解析源站地址，并保证路径以 `/` 结尾，便于后续 `join` 相对路径。
pub fn format_origin(url: &str) -> Option<Url> {
    let mut origin = Url::parse(url.trim()).ok()?;
    if origin.cannot_be_a_base() {
        return None;
    }

    if !origin.path().ends_with('/') {
        let new_path = format!("{}/", origin.path());
        origin.set_path(&new_path);
    }

    Some(origin)
}
