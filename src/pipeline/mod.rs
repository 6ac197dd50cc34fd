pub mod cluster;
pub mod distance;
pub mod organize;
pub mod sample;
