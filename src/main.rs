use anyhow::Result;
use clap::Parser;

use palette_sift::cli::Args;
use palette_sift::pipeline::cluster::cluster_colors;
use palette_sift::pipeline::organize::organize;
use palette_sift::pipeline::sample::{load_image, sample_pixels};
use palette_sift::render::render;

fn main() -> Result<()> {
    let args = Args::parse();

    let img = load_image(&args.image)?;
    eprintln!("Starting with {}", args.image.display());
    eprintln!("Image dimensions: {}x{}", img.width(), img.height());

    let samples = sample_pixels(&img, args.sampling)?;
    let trackers = cluster_colors(
        samples.entries(),
        args.distance,
        args.grouping,
        f64::from(args.min_separation),
    );
    eprintln!("Distinct colors: {}", samples.distinct_colors());
    eprintln!("Initial clusters: {}", trackers.len());

    let buckets = organize(&trackers);
    print!("{}", render(&buckets, args.hsv));

    Ok(())
}
