use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::color::Color;
use crate::error::PaletteError;

/// Frequency-weighted multiset of sampled pixel colors.
///
/// Entries are kept in first-seen raster order, and that order is part of
/// the contract: the greedy assignment pass scans them in exactly this
/// sequence, so the result depends on which distinct color appears first.
#[derive(Debug, Clone)]
pub struct SampleSet {
    entries: Vec<(Color, u64)>,
    total: u64,
}

impl SampleSet {
    /// `(color, frequency)` pairs in first-seen raster order.
    pub fn entries(&self) -> &[(Color, u64)] {
        &self.entries
    }

    /// Number of distinct colors sampled.
    pub fn distinct_colors(&self) -> usize {
        self.entries.len()
    }

    /// Total number of sampled pixel positions.
    pub fn total_samples(&self) -> u64 {
        self.total
    }
}

/// Load an image and flatten it to RGB, dropping any alpha channel.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    Ok(img.to_rgb8())
}

/// Read pixels at multiples of `stride` along both axes, in raster order
/// (top-to-bottom, left-to-right), and tally each distinct color.
///
/// Row and column 0 are always visited, so a stride larger than the image
/// still yields one sample; only a zero-sized image produces none.
pub fn sample_pixels(img: &RgbImage, stride: u32) -> crate::error::Result<SampleSet> {
    if stride == 0 {
        return Err(PaletteError::ZeroStride);
    }

    let mut entries: Vec<(Color, u64)> = Vec::new();
    let mut index: HashMap<Color, usize> = HashMap::new();
    let mut total = 0u64;

    for y in (0..img.height()).step_by(stride as usize) {
        for x in (0..img.width()).step_by(stride as usize) {
            let p = img.get_pixel(x, y);
            let color = Color::new(p[0], p[1], p[2]);
            total += 1;
            match index.get(&color) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(color, entries.len());
                    entries.push((color, 1));
                }
            }
        }
    }

    if total == 0 {
        return Err(PaletteError::NoSamples {
            width: img.width(),
            height: img.height(),
            stride,
        });
    }

    Ok(SampleSet { entries, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([10, 20, 30])
            } else {
                image::Rgb([200, 210, 220])
            }
        })
    }

    #[test]
    fn stride_one_visits_every_pixel() {
        let img = checkerboard(4, 4);
        let samples = sample_pixels(&img, 1).unwrap();
        assert_eq!(samples.total_samples(), 16);
        assert_eq!(samples.distinct_colors(), 2);
    }

    #[test]
    fn stride_two_visits_quarter() {
        let img = checkerboard(4, 4);
        let samples = sample_pixels(&img, 2).unwrap();
        // Positions (0,0), (2,0), (0,2), (2,2): all on even parity.
        assert_eq!(samples.total_samples(), 4);
        assert_eq!(samples.distinct_colors(), 1);
    }

    #[test]
    fn stride_beyond_image_still_samples_origin() {
        let img = checkerboard(4, 4);
        let samples = sample_pixels(&img, 100).unwrap();
        assert_eq!(samples.total_samples(), 1);
        assert_eq!(samples.entries()[0], (Color::new(10, 20, 30), 1));
    }

    #[test]
    fn entries_in_first_seen_raster_order() {
        // Row 0: A B, row 1: C A. First-seen order must be A, B, C.
        let a = [1u8, 1, 1];
        let b = [2u8, 2, 2];
        let c = [3u8, 3, 3];
        let img = RgbImage::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) => image::Rgb(a),
            (1, 0) => image::Rgb(b),
            (0, 1) => image::Rgb(c),
            _ => image::Rgb(a),
        });
        let samples = sample_pixels(&img, 1).unwrap();
        assert_eq!(
            samples.entries(),
            &[
                (Color::new(1, 1, 1), 2),
                (Color::new(2, 2, 2), 1),
                (Color::new(3, 3, 3), 1),
            ]
        );
    }

    #[test]
    fn zero_sized_image_is_degenerate() {
        let img = RgbImage::new(0, 0);
        let err = sample_pixels(&img, 1).unwrap_err();
        assert_eq!(
            err,
            PaletteError::NoSamples {
                width: 0,
                height: 0,
                stride: 1
            }
        );
    }

    #[test]
    fn zero_stride_is_rejected() {
        let img = checkerboard(4, 4);
        assert_eq!(sample_pixels(&img, 0).unwrap_err(), PaletteError::ZeroStride);
    }

    #[test]
    fn frequencies_sum_to_total() {
        let img = checkerboard(7, 5);
        let samples = sample_pixels(&img, 1).unwrap();
        let sum: u64 = samples.entries().iter().map(|(_, f)| f).sum();
        assert_eq!(sum, samples.total_samples());
        assert_eq!(sum, 35);
    }
}
