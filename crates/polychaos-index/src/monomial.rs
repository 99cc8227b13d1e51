//! Exponent tuples: the multi-indices of monomial terms.
//!
//! A tuple `(2, 0, 1)` stands for `q0^2 * q2`. Tuples are stored inline
//! for up to [`INLINE_DIMS`] dimensions and spill to the heap beyond that.

use std::fmt;
use std::ops::Deref;

use smallvec::SmallVec;

/// Number of exponents stored without a heap allocation.
pub const INLINE_DIMS: usize = 4;

/// An immutable exponent tuple, one non-negative exponent per dimension.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ExponentTuple(SmallVec<[u32; INLINE_DIMS]>);

impl ExponentTuple {
    /// Creates a tuple from a slice of exponents.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Creates the all-zero tuple (the constant monomial 1).
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// Creates the tuple of the single variable `q_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars);
        let mut exps = SmallVec::from_elem(0, num_vars);
        exps[i] = 1;
        Self(exps)
    }

    /// Number of dimensions.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Total polynomial order: the sum of all exponents.
    #[must_use]
    pub fn total_order(&self) -> u64 {
        self.0.iter().map(|&e| u64::from(e)).sum()
    }

    /// Adds exponents componentwise (monomial multiplication).
    ///
    /// # Panics
    ///
    /// Panics if the tuples have different lengths.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars(), other.num_vars());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Restricts the tuple to the given dimensions, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is out of range.
    #[must_use]
    pub fn restrict(&self, dims: &[usize]) -> Self {
        Self(dims.iter().map(|&d| self.0[d]).collect())
    }

    /// Scatters the tuple into `num_vars` dimensions: exponent `k` lands at
    /// `dims[k]`, every other position is zero.
    ///
    /// # Panics
    ///
    /// Panics if `dims` is shorter than the tuple or a target is out of range.
    #[must_use]
    pub fn embed(&self, dims: &[usize], num_vars: usize) -> Self {
        let mut exps = SmallVec::from_elem(0, num_vars);
        for (k, &e) in self.0.iter().enumerate() {
            exps[dims[k]] = e;
        }
        Self(exps)
    }

    /// Renders the tuple as a monomial over variables `q0, q1, ...`.
    #[must_use]
    pub fn to_monomial_string(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| if e == 1 { format!("q{i}") } else { format!("q{i}^{e}") })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl Deref for ExponentTuple {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for ExponentTuple {
    fn from(exps: Vec<u32>) -> Self {
        Self(SmallVec::from_vec(exps))
    }
}

impl From<&[u32]> for ExponentTuple {
    fn from(exps: &[u32]) -> Self {
        Self::new(exps)
    }
}

impl<const N: usize> From<[u32; N]> for ExponentTuple {
    fn from(exps: [u32; N]) -> Self {
        Self::new(&exps)
    }
}

impl FromIterator<u32> for ExponentTuple {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for ExponentTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ExponentTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}
