use std::str::FromStr;

use crate::color::Color;
use crate::error::PaletteError;
use crate::pipeline::distance::DistanceMetric;

/// A running cluster representative: one color plus the number of sampled
/// pixels it stands for.
///
/// Trackers are only ever created seeded with a color, so `weight >= 1`
/// holds for a tracker's whole life. During the clustering pass exactly one
/// merge policy mutates a given tracker; afterwards trackers are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTracker {
    pub color: Color,
    pub weight: u64,
}

impl ClusterTracker {
    pub fn seeded(color: Color, weight: u64) -> Self {
        Self { color, weight }
    }
}

/// How a tracker absorbs an incoming color.
///
/// One policy is fixed for the whole pass; policies are never mixed on the
/// same tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MergePolicy {
    /// Integer-truncating weighted mean of old and new color. The floor
    /// division makes the centroid depend on merge order; that exact
    /// truncation is part of the output contract.
    Avg,
    /// Keep whichever color is more saturated (ties go to the incoming
    /// color). Never blends, so every final color was actually sampled.
    Rpr,
}

impl MergePolicy {
    /// Merge `multiplicity` copies of `color` into `tracker`.
    pub fn apply(self, tracker: &mut ClusterTracker, color: Color, multiplicity: u64) {
        match self {
            Self::Avg => {
                let old_w = tracker.weight;
                let new_w = old_w + multiplicity;
                let blend = |old: u8, new: u8| -> u8 {
                    ((u64::from(old) * old_w + u64::from(new) * multiplicity) / new_w) as u8
                };
                tracker.color = Color::new(
                    blend(tracker.color.r, color.r),
                    blend(tracker.color.g, color.g),
                    blend(tracker.color.b, color.b),
                );
                tracker.weight = new_w;
            }
            Self::Rpr => {
                tracker.weight += multiplicity;
                if color.to_hsv().s >= tracker.color.to_hsv().s {
                    tracker.color = color;
                }
            }
        }
    }
}

impl FromStr for MergePolicy {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(Self::Avg),
            "rpr" => Ok(Self::Rpr),
            other => Err(PaletteError::UnknownGrouping(other.to_string())),
        }
    }
}

/// Greedy single-pass cluster assignment.
///
/// Walks the sampled entries in their given (first-seen raster) order. Each
/// color joins the *first* existing tracker within `threshold` of its
/// representative, scanned in tracker creation order; otherwise it seeds a
/// new tracker at the end of the list. First-match rather than
/// nearest-match: assignment depends on the order distinct colors first
/// appeared, which is deterministic for a fixed stride and raster traversal.
pub fn cluster_colors(
    entries: &[(Color, u64)],
    metric: DistanceMetric,
    policy: MergePolicy,
    threshold: f64,
) -> Vec<ClusterTracker> {
    let mut trackers: Vec<ClusterTracker> = Vec::new();
    for &(color, frequency) in entries {
        let matched = trackers
            .iter_mut()
            .find(|t| metric.evaluate(color, t.color) <= threshold);
        match matched {
            Some(tracker) => policy.apply(tracker, color, frequency),
            None => trackers.push(ClusterTracker::seeded(color, frequency)),
        }
    }
    trackers
}
