use crossterm::style::{Color as TermColor, Stylize};

use crate::pipeline::organize::Bucket;

/// Render the six buckets as a terminal preview: a truecolor swatch block,
/// the hex code, and the sample count per cluster, with a weighted header
/// per bucket.
pub fn render(buckets: &[Bucket], show_hsv: bool) -> String {
    let mut out = String::new();
    for bucket in buckets {
        out.push_str(&format!(
            "{} Weight: {}\n",
            bucket.label,
            bucket.total_weight()
        ));
        for tracker in &bucket.trackers {
            let swatch = "    ".on(TermColor::Rgb {
                r: tracker.color.r,
                g: tracker.color.g,
                b: tracker.color.b,
            });
            out.push_str(&format!(
                "{swatch}\t{}  n={}",
                tracker.color.to_hex(),
                tracker.weight
            ));
            if show_hsv {
                let hsv = tracker.color.to_hsv();
                out.push_str(&format!(
                    "  HSV: ({:.3}, {:.3}, {:.0})",
                    hsv.h, hsv.s, hsv.v
                ));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
