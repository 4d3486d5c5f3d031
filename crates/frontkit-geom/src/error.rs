use thiserror::Error;

/// Geometry error type.
#[derive(PartialEq, Error, Debug, Clone)]
pub enum Error {
    /// An interval whose start lies after its end, or with a NaN bound.
    #[error("invalid interval [{start}, {end}]")]
    InvalidInterval {
        /// Start of the rejected interval.
        start: f64,
        /// End of the rejected interval.
        end: f64,
    },
    /// A rectangle with a negative or NaN extent.
    #[error("invalid rect {w}x{h}")]
    InvalidRect {
        /// Width of the rejected rectangle.
        w: f64,
        /// Height of the rejected rectangle.
        h: f64,
    },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;
