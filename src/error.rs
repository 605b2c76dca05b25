use thiserror::Error;

/// Configuration errors. All of them are detected before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i64, height: i64 },
    #[error("grid dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: i64, height: i64 },
    #[error("live-cell probability must be within 0..=1, got {0}")]
    InvalidProbability(f64),
    #[error("invalid seed coordinates: {0:?}")]
    InvalidSeed(String),
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
