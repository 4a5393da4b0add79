pub mod config;
pub mod entrance;
pub mod manifest;
pub mod range;
pub mod stitch;
