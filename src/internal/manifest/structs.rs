pub mod file_descriptor;
pub mod manifest;

pub use file_descriptor::FileDescriptor;
pub use manifest::{Manifest, ManifestEntry, ManifestMetadata};
