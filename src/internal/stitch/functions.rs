pub mod fetch_chunk;
pub mod forward_chunk;
pub mod plan_chunk_requests;
pub mod spawn_stitch;

pub use plan_chunk_requests::{plan_full_requests, plan_range_requests};
pub use spawn_stitch::{spawn_stitch, SpawnStitchParams, StitchItem, StitchStream};
