use std::cmp::Reverse;

use crate::color::{Color, Hsv};
use crate::error::{PaletteError, Result};
use crate::pipeline::cluster::ClusterTracker;

/// A named slice of the palette: light/medium/dark crossed with
/// saturated/desaturated.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub label: &'static str,
    pub trackers: Vec<ClusterTracker>,
}

impl Bucket {
    pub fn total_weight(&self) -> u64 {
        self.trackers.iter().map(|t| t.weight).sum()
    }
}

/// Replace every tracker's saturation and value with the group's
/// weighted averages, keeping each tracker's hue and weight.
///
/// The average value is floored to a whole unit on the 0-255 scale; the
/// average saturation stays fractional. Produces new trackers; the inputs
/// are not touched.
pub fn unify(trackers: &[ClusterTracker], bucket: &'static str) -> Result<Vec<ClusterTracker>> {
    let total: u64 = trackers.iter().map(|t| t.weight).sum();
    if total == 0 {
        return Err(PaletteError::EmptyGroup { bucket });
    }

    let weighted =
        |f: fn(Hsv) -> f64| -> f64 {
            trackers
                .iter()
                .map(|t| f(t.color.to_hsv()) * t.weight as f64)
                .sum::<f64>()
                / total as f64
        };
    let avg_sat = weighted(|hsv| hsv.s);
    let avg_val = weighted(|hsv| hsv.v).floor();

    Ok(trackers
        .iter()
        .map(|t| {
            ClusterTracker::seeded(
                Color::from_hsv(Hsv {
                    h: t.color.to_hsv().h,
                    s: avg_sat,
                    v: avg_val,
                }),
                t.weight,
            )
        })
        .collect())
}

/// Partition finished clusters into the six palette buckets.
///
/// Trackers are sorted by brightness, cut into position terciles
/// (light/medium/dark), each tercile sorted by saturation and halved by
/// position, and each half unified and sorted by hue. All splits are
/// count-based; with floor-division boundaries the remainder lands in the
/// later, darker groups. Empty halves come back as empty buckets.
pub fn organize(trackers: &[ClusterTracker]) -> Vec<Bucket> {
    let mut by_value: Vec<ClusterTracker> = trackers.to_vec();
    // Descending by whole-unit value; stable, so creation order breaks ties.
    by_value.sort_by_key(|t| Reverse(t.color.to_hsv().v as u32));

    let n = by_value.len();
    let (cut1, cut2) = (n / 3, n * 2 / 3);
    let terciles = [
        ("Light", &by_value[..cut1]),
        ("Medium", &by_value[cut1..cut2]),
        ("Dark", &by_value[cut2..]),
    ];

    let mut buckets = Vec::with_capacity(6);
    for (tone, group) in terciles {
        let mut by_sat = group.to_vec();
        by_sat.sort_by(|a, b| a.color.to_hsv().s.total_cmp(&b.color.to_hsv().s));
        let (desat, sat) = by_sat.split_at(by_sat.len() / 2);

        for (members, label) in [
            (sat, saturated_label(tone)),
            (desat, desaturated_label(tone)),
        ] {
            let mut unified = unify(members, label).unwrap_or_default();
            unified.sort_by(|a, b| a.color.to_hsv().h.total_cmp(&b.color.to_hsv().h));
            buckets.push(Bucket {
                label,
                trackers: unified,
            });
        }
    }
    buckets
}

fn saturated_label(tone: &str) -> &'static str {
    match tone {
        "Light" => "Light & Saturated",
        "Medium" => "Medium & Saturated",
        _ => "Dark & Saturated",
    }
}

fn desaturated_label(tone: &str) -> &'static str {
    match tone {
        "Light" => "Light & Desaturated",
        "Medium" => "Medium & Desaturated",
        _ => "Dark & Desaturated",
    }
}
