//! Orderings of exponent tuples.
//!
//! The ordering of an index set fixes which coefficient goes with which
//! basis polynomial, so every mode is a strict total order on tuples of one
//! dimensionality. Worked example for two dimensions up to order 2:
//!
//! ```text
//! graded-lexicographic  (0,0) (1,0) (0,1) (2,0) (1,1) (0,2)
//! graded-reverse        (0,0) (0,1) (1,0) (0,2) (1,1) (2,0)
//! lexicographic         (0,0) (1,0) (2,0) (0,1) (1,1) (0,2)
//! reverse               (0,0) (0,1) (0,2) (1,0) (1,1) (2,0)
//! ```
//!
//! Graded modes compare total order first. Non-reversed modes then treat
//! the last dimension as most significant; reversed modes treat the first
//! dimension as most significant.

use std::cmp;
use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;
use crate::monomial::ExponentTuple;

/// An ordering of exponent tuples.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Ordering {
    /// Total order first, then last dimension most significant.
    ///
    /// Within a shell a larger first exponent sorts earlier:
    /// `(2,0) < (1,1) < (0,2)`.
    #[default]
    GradedLexicographic,

    /// Total order first, then first dimension most significant.
    GradedReverse,

    /// Ungraded, last dimension most significant.
    Lexicographic,

    /// Ungraded, first dimension most significant.
    Reverse,
}

impl Ordering {
    /// All ordering modes.
    pub const ALL: [Ordering; 4] = [
        Ordering::GradedLexicographic,
        Ordering::GradedReverse,
        Ordering::Lexicographic,
        Ordering::Reverse,
    ];

    /// Compares two tuples of equal length under this ordering.
    #[must_use]
    pub fn compare(&self, a: &ExponentTuple, b: &ExponentTuple) -> cmp::Ordering {
        debug_assert_eq!(a.num_vars(), b.num_vars());

        if self.is_graded() {
            match a.total_order().cmp(&b.total_order()) {
                cmp::Ordering::Equal => {}
                ord => return ord,
            }
        }

        if self.is_reversed() {
            cmp_first_major(a, b)
        } else {
            cmp_last_major(a, b)
        }
    }

    /// Sorts tuples in place.
    pub fn sort(&self, tuples: &mut [ExponentTuple]) {
        tuples.sort_unstable_by(|a, b| self.compare(a, b));
    }

    /// Returns true if total order is the primary key.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, Ordering::GradedLexicographic | Ordering::GradedReverse)
    }

    /// Returns true if the first dimension is the most significant.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        matches!(self, Ordering::GradedReverse | Ordering::Reverse)
    }

    /// Returns the canonical name of the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Ordering::GradedLexicographic => "graded-lexicographic",
            Ordering::GradedReverse => "graded-reverse",
            Ordering::Lexicographic => "lexicographic",
            Ordering::Reverse => "reverse",
        }
    }
}

/// Compares reading from the last dimension to the first.
fn cmp_last_major(a: &ExponentTuple, b: &ExponentTuple) -> cmp::Ordering {
    a.iter().rev().cmp(b.iter().rev())
}

/// Compares reading from the first dimension to the last.
fn cmp_first_major(a: &ExponentTuple, b: &ExponentTuple) -> cmp::Ordering {
    a.exponents().cmp(b.exponents())
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ordering {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graded-lexicographic" | "grlex" | "graded" => Ok(Ordering::GradedLexicographic),
            "graded-reverse" => Ok(Ordering::GradedReverse),
            "lexicographic" | "lex" => Ok(Ordering::Lexicographic),
            "reverse" => Ok(Ordering::Reverse),
            other => Err(IndexError::InvalidOrdering(other.to_string())),
        }
    }
}
