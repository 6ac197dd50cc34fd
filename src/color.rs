use anyhow::{bail, Result};

/// Core color type used throughout the pipeline.
/// An immutable RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV form of a [`Color`], computed on demand and never stored long-term.
///
/// Hue is cyclic in [0,1) and saturation in [0,1]. Value keeps the 0-255
/// channel scale: the merge and unification steps truncate value to whole
/// units, and that truncation must stay an exact integer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSV. Standard conversion; value is the max channel,
    /// kept on the 0-255 scale.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let v = maxc;
        if maxc == minc {
            return Hsv { h: 0.0, s: 0.0, v };
        }
        let delta = maxc - minc;
        let s = delta / maxc;
        let rc = (maxc - r) / delta;
        let gc = (maxc - g) / delta;
        let bc = (maxc - b) / delta;
        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        Hsv {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }

    /// Create from HSV, truncating each resulting channel to a whole unit.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let Hsv { h, s, v } = hsv;
        if s == 0.0 {
            let c = v as u8;
            return Self { r: c, g: c, b: c };
        }
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
