pub mod byte_interval;
pub mod chunk_window;

pub use byte_interval::ByteInterval;
pub use chunk_window::ChunkWindow;
