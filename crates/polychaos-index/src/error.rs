//! Errors raised while validating truncation parameters and index sets.

use thiserror::Error;

use crate::monomial::ExponentTuple;

/// Errors that can occur when building truncation specs and index sets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Dimensionality below one, or a tuple of the wrong length.
    #[error("invalid dimensionality: expected {expected}, got {got}")]
    InvalidDimension {
        /// Dimensionality that was required.
        expected: usize,
        /// Dimensionality that was supplied.
        got: usize,
    },

    /// Lower bound above upper bound.
    #[error("invalid bounds: lower {lower} must not exceed upper {upper}")]
    InvalidBound {
        /// Inclusive lower bound.
        lower: u32,
        /// Exclusive upper bound.
        upper: u32,
    },

    /// A per-dimension upper bound of zero, which admits no tuple.
    #[error("invalid bounds: per-dimension bound for dimension {dim} must be positive")]
    ZeroDimensionBound {
        /// The dimension whose bound is zero.
        dim: usize,
    },

    /// Non-positive norm order or malformed weights.
    #[error("invalid norm: {0}")]
    InvalidNorm(String),

    /// The same tuple appears twice.
    #[error("duplicate index {0}")]
    DuplicateIndex(ExponentTuple),

    /// Unknown ordering name.
    #[error("unknown ordering '{0}'")]
    InvalidOrdering(String),
}

impl IndexError {
    /// Error for a dimensionality below one.
    #[must_use]
    pub fn zero_dimensions() -> Self {
        IndexError::InvalidDimension { expected: 1, got: 0 }
    }
}
