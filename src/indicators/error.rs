//! Indicator error types.

use thiserror::Error;

/// Typed failures surfaced by the indicator pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Series shorter than a window with no fallback policy.
    #[error("insufficient data: need {required} values, got {actual}")]
    InsufficientData {
        /// Required number of values.
        required: usize,
        /// Actual number of values provided.
        actual: usize,
    },

    /// Zero denominator with no substitution policy.
    #[error("division by zero while computing {0}")]
    DivideByZero(&'static str),

    /// A computed field came out NaN or infinite.
    #[error("non-finite value produced for {0}")]
    NumericDegenerate(&'static str),

    /// A bar failed validation before any indicator ran.
    #[error("malformed bar at index {index}: {reason}")]
    MalformedBar {
        /// Position of the offending bar in the series.
        index: usize,
        /// Which invariant the bar broke.
        reason: String,
    },

    /// Invalid parameters for a windowed function.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl IndicatorError {
    pub fn insufficient(required: usize, actual: usize) -> Self {
        IndicatorError::InsufficientData { required, actual }
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        IndicatorError::MalformedBar {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidParams(msg.into())
    }
}
