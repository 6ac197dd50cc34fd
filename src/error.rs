//! Error types for the palette-sift library.

use thiserror::Error;

/// Result type alias for palette extraction operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors produced by the clustering and bucketing engine.
///
/// All errors are terminal for the run: there is no partial-palette
/// fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// An unrecognized distance metric identifier.
    #[error("unknown distance metric {0:?} (expected \"naive\" or \"rrm\")")]
    UnknownMetric(String),

    /// An unrecognized grouping method identifier.
    #[error("unknown grouping method {0:?} (expected \"avg\" or \"rpr\")")]
    UnknownGrouping(String),

    /// The sampling stride must be a positive number of pixels.
    #[error("sampling stride must be at least 1")]
    ZeroStride,

    /// Sampling visited zero pixel positions (zero-sized image).
    #[error("no pixels sampled from {width}x{height} image at stride {stride}")]
    NoSamples { width: u32, height: u32, stride: u32 },

    /// A weighted average was requested over an empty cluster group.
    #[error("cannot unify the empty {bucket} group")]
    EmptyGroup { bucket: &'static str },
}
