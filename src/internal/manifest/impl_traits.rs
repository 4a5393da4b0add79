pub mod file_manifest_source;
pub mod http_manifest_source;

pub use file_manifest_source::FileManifestSource;
pub use http_manifest_source::HttpManifestSource;
