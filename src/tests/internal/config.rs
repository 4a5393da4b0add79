use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    ConfigError, ServerConfig, DEFAULT_BIND, DEFAULT_CHANNEL_CAPACITY, DEFAULT_MANIFEST_PATH,
};

fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert!(cfg.origin.is_none());
    assert_eq!(cfg.manifest_path, DEFAULT_MANIFEST_PATH);
    assert!(cfg.manifest_file.is_none());
    assert_eq!(cfg.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    assert!(cfg.connect_timeout.is_none());
}

#[test]
fn reads_every_variable() {
    let cfg = from_pairs(&[
        ("CHUNK_STREAM_BIND", "0.0.0.0:9000"),
        ("CHUNK_STREAM_ORIGIN", "https://store.example/files"),
        ("CHUNK_STREAM_MANIFEST_PATH", "/meta/config.json"),
        ("CHUNK_STREAM_MANIFEST_FILE", "/etc/chunk-stream/config.json"),
        ("CHUNK_STREAM_CHANNEL_CAPACITY", "4"),
        ("CHUNK_STREAM_CONNECT_TIMEOUT_SECS", "5"),
    ])
    .unwrap();

    assert_eq!(cfg.bind, "0.0.0.0:9000");
    assert_eq!(
        cfg.origin.as_ref().map(|u| u.as_str()),
        Some("https://store.example/files/")
    );
    assert_eq!(cfg.manifest_path, "meta/config.json");
    assert_eq!(
        cfg.manifest_file,
        Some(PathBuf::from("/etc/chunk-stream/config.json"))
    );
    assert_eq!(cfg.channel_capacity, 4);
    assert_eq!(cfg.connect_timeout, Some(Duration::from_secs(5)));
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = from_pairs(&[("CHUNK_STREAM_ORIGIN", "  "), ("CHUNK_STREAM_BIND", "")]).unwrap();
    assert!(cfg.origin.is_none());
    assert_eq!(cfg.bind, DEFAULT_BIND);
}

#[test]
fn rejects_invalid_values() {
    for (var, value) in [
        ("CHUNK_STREAM_ORIGIN", "not a url"),
        ("CHUNK_STREAM_CHANNEL_CAPACITY", "0"),
        ("CHUNK_STREAM_CHANNEL_CAPACITY", "many"),
        ("CHUNK_STREAM_CONNECT_TIMEOUT_SECS", "-1"),
    ] {
        match from_pairs(&[(var, value)]) {
            Err(ConfigError::InvalidEnv { var: v, .. }) => assert_eq!(v, var),
            other => panic!("{var}={value} 应当无效，得到 {other:?}"),
        }
    }
}
