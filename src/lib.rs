//! Extract a small, theming-ready color palette from a raster image.
//!
//! Pixels are sampled on a fixed stride, greedily clustered into weighted
//! representative trackers, then reorganized into six perceptually
//! meaningful buckets (light/medium/dark crossed with
//! saturated/desaturated) suitable for a terminal or UI color scheme.

pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod render;
