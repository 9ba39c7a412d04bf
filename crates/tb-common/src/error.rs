//! Error types for the Bayesian suite engine.

use thiserror::Error;

/// Result type alias for suite engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the suite engine.
#[derive(Error, Debug)]
pub enum Error {
    // Distribution state errors (10-19)
    #[error("distribution has no hypotheses")]
    EmptyDistribution,

    #[error("distribution has zero total mass")]
    ZeroMassDistribution,

    #[error("distribution is not normalized: total mass {total}")]
    UnnormalizedDistribution { total: f64 },

    #[error("hypothesis {0} does not exist")]
    UnknownHypothesis(String),

    #[error("distribution has non-finite mass: total {total}")]
    NonFiniteDistribution { total: f64 },

    // Query and construction errors (20-29)
    #[error("percentile {0} is outside of required range [0, 1]")]
    InvalidPercentile(f64),

    #[error("credible interval length {0} is outside of required range (0, 100]")]
    InvalidIntervalLength(f64),

    #[error("beta parameters must be positive: alpha={alpha}, beta={beta}")]
    InvalidBetaParameters { alpha: f64, beta: f64 },

    #[error("invalid bound: low {low} exceeds high {high}")]
    InvalidBound { low: i64, high: i64 },

    #[error("discretization needs at least 2 points, got {0}")]
    InvalidStepCount(usize),

    // Configuration errors (30-39)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unsupported schema version: {version}")]
    UnsupportedSchema { version: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    pub fn code(&self) -> u32 {
        match self {
            Error::EmptyDistribution => 10,
            Error::ZeroMassDistribution => 11,
            Error::UnnormalizedDistribution { .. } => 12,
            Error::UnknownHypothesis(_) => 13,
            Error::NonFiniteDistribution { .. } => 14,
            Error::InvalidPercentile(_) => 20,
            Error::InvalidIntervalLength(_) => 21,
            Error::InvalidBetaParameters { .. } => 22,
            Error::InvalidBound { .. } => 23,
            Error::InvalidStepCount(_) => 24,
            Error::Config(_) => 30,
            Error::UnsupportedSchema { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether the condition is a warning the caller may ignore.
    ///
    /// Only a scaling request against an absent hypothesis is recoverable;
    /// the rest of an update batch proceeds regardless.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnknownHypothesis(_))
    }
}
