pub mod parse_range_header;
pub mod resolve_chunk_window;

pub use parse_range_header::parse_range_header;
pub use resolve_chunk_window::resolve_chunk_window;
