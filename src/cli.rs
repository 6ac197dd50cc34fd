use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::cluster::MergePolicy;
use crate::pipeline::distance::DistanceMetric;

/// Infer a terminal color scheme from an image.
#[derive(Parser, Debug)]
#[command(name = "palette-sift", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// How far colors in the palette should be separated, in the units of
    /// the chosen distance metric
    #[arg(short = 'm', long, default_value_t = 32)]
    pub min_separation: u32,

    /// Read pixels at multiples of this stride along both axes
    #[arg(short = 's', long, default_value_t = 16)]
    pub sampling: u32,

    /// Requested number of output colors (accepted for compatibility; the
    /// output is always six buckets, split by position)
    #[arg(short = 'n', long, default_value_t = 12)]
    pub num_colors: usize,

    /// How to score chroma distance: plain rectilinear, or weighted for
    /// perceptual red sensitivity
    #[arg(long, value_enum, default_value_t = DistanceMetric::Rrm)]
    pub distance: DistanceMetric,

    /// How a cluster absorbs new colors: weighted average, or keep the most
    /// saturated sampled color
    #[arg(long, value_enum, default_value_t = MergePolicy::Rpr)]
    pub grouping: MergePolicy,

    /// Append HSV values to each swatch line
    #[arg(long)]
    pub hsv: bool,
}
