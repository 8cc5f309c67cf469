use thiserror::Error;

/// Validation and contract errors exposed by `equisift-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("metric '{field}' must be finite")]
    NonFiniteMetric { field: &'static str },
    #[error("metric '{field}' must be non-negative")]
    NegativeMetric { field: &'static str },
}
