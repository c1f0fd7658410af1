use thiserror::Error;

/// Failures raised by the streaming core.
///
/// Configuration variants are fatal at construction. Input variants are
/// detected before any filter state is touched, so the offending observation
/// is simply not applied and the filter remains usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("timesteps must be > 0")]
    InvalidTimesteps,

    #[error("features must be > 0")]
    InvalidFeatures,

    #[error("tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),

    #[error("min_std_err must be a finite, positive number (got {0})")]
    InvalidStdErrFloor(f64),

    #[error("observation has {found} features, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("observation value at index {index} is not finite")]
    NonFiniteValue { index: usize },
}
