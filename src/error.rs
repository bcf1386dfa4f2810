//! Error types for validated gradient and palette construction.

use thiserror::Error;

/// A gradient table that breaks the evaluator's contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Interpolation needs a pair of colors at least
    #[error("a gradient needs at least 2 colors, got {count}")]
    TooFewColors {
        /// Number of colors supplied
        count: usize,
    },

    /// Every color needs exactly one stop
    #[error("{colors} colors but {stops} stop positions")]
    StopCountMismatch {
        /// Number of colors supplied
        colors: usize,
        /// Number of stop positions supplied
        stops: usize,
    },

    /// Stop outside of 0.0–1.0 (or NaN)
    #[error("stop {index} is {value}, expected a position in 0.0..=1.0")]
    StopOutOfRange {
        /// Index of the offending stop
        index: usize,
        /// The offending position
        value: f64,
    },

    /// Stops must strictly increase
    #[error("stop {index} ({value}) does not come after the previous stop")]
    UnorderedStops {
        /// Index of the offending stop
        index: usize,
        /// The offending position
        value: f64,
    },
}

/// A custom palette whose size does not fill whole rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette size must be at least, and a multiple of, {row_len}; got {len}")]
    InvalidLength {
        /// Number of colors supplied
        len: usize,
        /// Colors per palette row
        row_len: usize,
    },
}
