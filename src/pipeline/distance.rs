use std::str::FromStr;

use crate::color::Color;
use crate::error::PaletteError;

/// Dissimilarity metric between two RGB colors.
///
/// The set is closed and fixed for a whole run: the caller picks one metric
/// up front and never mixes metrics mid-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceMetric {
    /// Sum of absolute per-channel differences (L1 in RGB). Range [0, 765].
    Naive,
    /// Rectilinear redmean: L1 with red/blue weights shifted by the average
    /// red level of the two colors. Not true Euclidean redmean; cheaper.
    Rrm,
}

impl DistanceMetric {
    /// Score the dissimilarity of `a` and `b`. Symmetric in its arguments.
    pub fn evaluate(self, a: Color, b: Color) -> f64 {
        let dr = f64::from(a.r.abs_diff(b.r));
        let dg = f64::from(a.g.abs_diff(b.g));
        let db = f64::from(a.b.abs_diff(b.b));
        match self {
            Self::Naive => dr + dg + db,
            Self::Rrm => {
                let r_bar = (u32::from(a.r) + u32::from(b.r)) / 2;
                let w_r = 0.5 + f64::from(r_bar) / 512.0;
                let w_b = 0.5 + f64::from(256 - r_bar) / 512.0;
                w_r * dr + dg + w_b * db
            }
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Self::Naive),
            "rrm" => Ok(Self::Rrm),
            other => Err(PaletteError::UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn naive_black_white_is_765() {
        assert_eq!(DistanceMetric::Naive.evaluate(BLACK, WHITE), 765.0);
    }

    #[test]
    fn naive_identical_is_zero() {
        let c = Color::new(12, 34, 56);
        assert_eq!(DistanceMetric::Naive.evaluate(c, c), 0.0);
    }

    #[test]
    fn naive_is_symmetric() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(250, 5, 90);
        assert_eq!(
            DistanceMetric::Naive.evaluate(a, b),
            DistanceMetric::Naive.evaluate(b, a)
        );
    }

    #[test]
    fn rrm_is_symmetric() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(250, 5, 90);
        let ab = DistanceMetric::Rrm.evaluate(a, b);
        let ba = DistanceMetric::Rrm.evaluate(b, a);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn rrm_weights_red_more_when_red_is_high() {
        // r_bar = 255 -> wR ~ 0.998, wB ~ 0.502: a pure-red delta should
        // score roughly twice a pure-blue delta at the same magnitude.
        let red_pair = (Color::new(255, 0, 0), Color::new(155, 0, 0));
        let blue_pair = (Color::new(255, 0, 0), Color::new(255, 0, 100));
        let red_dist = DistanceMetric::Rrm.evaluate(red_pair.0, red_pair.1);
        let blue_dist = DistanceMetric::Rrm.evaluate(blue_pair.0, blue_pair.1);
        assert!(
            red_dist > blue_dist,
            "red delta {red_dist} should outweigh blue delta {blue_dist}"
        );
    }

    #[test]
    fn rrm_matches_hand_computation() {
        // (100,0,0) vs (200,50,30): r_bar = 150, wR = 0.5 + 150/512,
        // wB = 0.5 + 106/512, dist = wR*100 + 50 + wB*30.
        let a = Color::new(100, 0, 0);
        let b = Color::new(200, 50, 30);
        let w_r = 0.5 + 150.0 / 512.0;
        let w_b = 0.5 + 106.0 / 512.0;
        let expected = w_r * 100.0 + 50.0 + w_b * 30.0;
        assert!((DistanceMetric::Rrm.evaluate(a, b) - expected).abs() < 1e-12);
    }

    #[test]
    fn parse_identifiers() {
        assert_eq!("naive".parse::<DistanceMetric>(), Ok(DistanceMetric::Naive));
        assert_eq!("rrm".parse::<DistanceMetric>(), Ok(DistanceMetric::Rrm));
        assert_eq!(
            "euclid".parse::<DistanceMetric>(),
            Err(PaletteError::UnknownMetric("euclid".to_string()))
        );
    }
}
