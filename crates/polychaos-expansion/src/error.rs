//! Errors raised while building and joining expansions.

use polychaos_index::{ExponentTuple, IndexError};
use thiserror::Error;

/// Why an expansion's dimensions do not line up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// Two sources claim the same target dimension.
    #[error("dimension {dim} is claimed by more than one source")]
    Overlap {
        /// The contested dimension.
        dim: usize,
    },

    /// A source names a dimension the target does not have.
    #[error("dimension {dim} is outside the target's {dimensions} dimensions")]
    OutOfRange {
        /// The offending dimension.
        dim: usize,
        /// Dimensionality of the target.
        dimensions: usize,
    },

    /// No source covers a target dimension.
    #[error("dimension {dim} is not covered by any source")]
    Uncovered {
        /// The first uncovered dimension.
        dim: usize,
    },

    /// A source is assigned a different number of dimensions than it has.
    #[error("source {position} spans {expected} dimensions but is assigned {got}")]
    SourceDimensions {
        /// Position of the source in the join.
        position: usize,
        /// Dimensionality of the source.
        expected: usize,
        /// Number of target dimensions assigned to it.
        got: usize,
    },

    /// A target tuple restricted to a source has no term in that source.
    #[error("source {position} has no term for {sub_tuple}")]
    MissingTerm {
        /// Position of the source in the join.
        position: usize,
        /// The restricted tuple that was looked up.
        sub_tuple: ExponentTuple,
    },

    /// A polynomial or point has the wrong number of variables.
    #[error("expected {expected} variables, got {got}")]
    VariableCount {
        /// Number of variables required.
        expected: usize,
        /// Number of variables supplied.
        got: usize,
    },
}

/// Errors that can occur when building or joining expansions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// Invalid truncation parameters or index set.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Dimensions of sources, polynomials or points do not line up.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(Mismatch),

    /// Coefficients are not aligned with the index set.
    #[error("expected {expected} coefficients, got {got}")]
    CoefficientCount {
        /// Number of tuples in the index set.
        expected: usize,
        /// Number of coefficients supplied.
        got: usize,
    },

    /// Polynomials are not aligned with the index set.
    #[error("expected {expected} polynomials, got {got}")]
    TermCount {
        /// Number of tuples in the index set.
        expected: usize,
        /// Number of polynomials supplied.
        got: usize,
    },
}

impl From<Mismatch> for ExpansionError {
    fn from(m: Mismatch) -> Self {
        ExpansionError::DimensionMismatch(m)
    }
}
