//! 清单解析、分片描述校验，以及两种清单来源。

use axum::http::StatusCode;
use url::Url;

use crate::manifest::{
    FileDescriptor, FileManifestSource, HttpManifestSource, Manifest, ManifestEntry,
    ManifestError, ManifestMetadata, ManifestSource,
};
use crate::tests::{sample_upstream, UpstreamBehavior};

fn origin() -> Url {
    Url::parse("http://store.test/base/").unwrap()
}

fn entry(chunks: &[&str], size: u64, chunks_size: &[u64]) -> ManifestEntry {
    ManifestEntry {
        chunks: chunks.iter().map(|c| c.to_string()).collect(),
        metadata: ManifestMetadata {
            size,
            chunks_size: chunks_size.to_vec(),
        },
    }
}

fn assert_corrupt(result: Result<FileDescriptor, ManifestError>) {
    match result {
        Err(ManifestError::Corrupt { name, .. }) => assert_eq!(name, "a.mp4"),
        other => panic!("预期 Corrupt，得到 {other:?}"),
    }
}

#[test]
fn parses_wire_format() {
    let manifest: Manifest = serde_json::from_str(
        r#"{"files":{"a.mp4":{"chunks":["c0","c1"],"metadata":{"size":300,"chunksSize":[100,200]}}}}"#,
    )
    .unwrap();

    let entry = manifest.entry("a.mp4").unwrap().unwrap();
    assert_eq!(entry.chunks, vec!["c0", "c1"]);
    assert_eq!(entry.metadata.size, 300);
    assert_eq!(entry.metadata.chunks_size, vec![100, 200]);
    assert!(manifest.entry("b.mp4").unwrap().is_none());
}

#[test]
fn missing_files_object_is_empty() {
    let manifest: Manifest = serde_json::from_str("{}").unwrap();
    assert!(manifest.files.is_empty());
    assert!(manifest.entry("a.mp4").unwrap().is_none());
}

#[test]
fn malformed_entry_does_not_affect_others() {
    let manifest: Manifest = serde_json::from_str(
        r#"{"files":{
            "good":{"chunks":["c0"],"metadata":{"size":1,"chunksSize":[1]}},
            "bad":{"chunks":5}
        }}"#,
    )
    .unwrap();

    assert!(manifest.entry("good").unwrap().is_some());
    assert!(matches!(
        manifest.entry("bad"),
        Err(ManifestError::Corrupt { .. })
    ));
}

#[test]
fn resolves_chunk_locations_against_origin() {
    let descriptor = FileDescriptor::from_entry(
        "a.mp4",
        entry(&["chunks/c0", "https://cdn.test/c1"], 300, &[100, 200]),
        &origin(),
    )
    .unwrap();

    assert_eq!(descriptor.name, "a.mp4");
    assert_eq!(descriptor.total_size, 300);
    assert_eq!(descriptor.chunk_sizes, vec![100, 200]);
    assert_eq!(descriptor.chunk_count(), 2);
    assert_eq!(
        descriptor.chunk_locations[0].as_str(),
        "http://store.test/base/chunks/c0"
    );
    assert_eq!(descriptor.chunk_locations[1].as_str(), "https://cdn.test/c1");
}

#[test]
fn rejects_inconsistent_entries() {
    assert_corrupt(FileDescriptor::from_entry(
        "a.mp4",
        entry(&["c0", "c1"], 100, &[100]),
        &origin(),
    ));
    assert_corrupt(FileDescriptor::from_entry(
        "a.mp4",
        entry(&["c0", "c1"], 301, &[100, 200]),
        &origin(),
    ));
    assert_corrupt(FileDescriptor::from_entry(
        "a.mp4",
        entry(&["c0", "c1"], 100, &[100, 0]),
        &origin(),
    ));
    assert_corrupt(FileDescriptor::from_entry(
        "a.mp4",
        entry(&["c0", "c1"], 0, &[u64::MAX, 1]),
        &origin(),
    ));
}

#[test]
fn empty_file_has_no_chunks() {
    let descriptor = FileDescriptor::from_entry("empty", entry(&[], 0, &[]), &origin()).unwrap();
    assert_eq!(descriptor.total_size, 0);
    assert_eq!(descriptor.chunk_count(), 0);
}

#[tokio::test]
async fn http_source_fetches_manifest_with_identity_encoding() {
    let (upstream, _) = sample_upstream(UpstreamBehavior::default()).await;
    let source = HttpManifestSource::new(reqwest::Client::new(), "config.json");

    let descriptor = source
        .describe(&upstream.origin, "a.mp4")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.total_size, 300);
    assert_eq!(
        descriptor.chunk_locations[1],
        upstream.origin.join("chunks/c1").unwrap()
    );
    assert!(source.describe(&upstream.origin, "nope").await.unwrap().is_none());

    let requests = upstream.requests();
    assert!(requests
        .iter()
        .all(|r| r.path == "/config.json" && r.accept_encoding.as_deref() == Some("identity")));
}

#[tokio::test]
async fn http_source_reports_status_and_parse_errors() {
    let (upstream, _) = sample_upstream(UpstreamBehavior {
        manifest_status: Some(StatusCode::BAD_GATEWAY),
        ..UpstreamBehavior::default()
    })
    .await;
    let source = HttpManifestSource::new(reqwest::Client::new(), "config.json");
    match source.fetch(&upstream.origin).await {
        Err(ManifestError::Status(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
        other => panic!("预期 Status，得到 {other:?}"),
    }

    let (upstream, _) = sample_upstream(UpstreamBehavior {
        raw_manifest: Some("{not json".to_string()),
        ..UpstreamBehavior::default()
    })
    .await;
    assert!(matches!(
        source.fetch(&upstream.origin).await,
        Err(ManifestError::Parse(_))
    ));
}

#[tokio::test]
async fn file_source_reads_local_manifest() {
    let path = std::env::temp_dir().join(format!(
        "chunk_stream_manifest_{}_file_source.json",
        std::process::id()
    ));
    tokio::fs::write(
        &path,
        r#"{"files":{"a.mp4":{"chunks":["c0","c1"],"metadata":{"size":300,"chunksSize":[100,200]}}}}"#,
    )
    .await
    .unwrap();

    let source = FileManifestSource::new(&path);
    let descriptor = source.describe(&origin(), "a.mp4").await.unwrap().unwrap();
    assert_eq!(
        descriptor.chunk_locations[0].as_str(),
        "http://store.test/base/c0"
    );

    tokio::fs::remove_file(&path).await.unwrap();
    assert!(matches!(
        source.fetch(&origin()).await,
        Err(ManifestError::ReadFile(_))
    ));
}
