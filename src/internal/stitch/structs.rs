pub mod body_window;
pub mod chunk_range;
pub mod chunk_request;

pub use body_window::{BodyWindow, Taken};
pub use chunk_range::ChunkRange;
pub use chunk_request::ChunkRequest;
