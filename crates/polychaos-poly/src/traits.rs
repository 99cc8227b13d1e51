//! Coefficient and polynomial traits.
//!
//! [`Ring`] is what the expansion machinery needs from a coefficient type.
//! [`Polynomial`] is the seam between index sets and whatever polynomial
//! representation a caller uses: the expansion builder only ever constructs
//! monomials, multiplies, re-indexes variables and evaluates.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use polychaos_index::ExponentTuple;

/// A commutative ring of coefficients.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
///
/// Floating-point types satisfy these up to rounding.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

macro_rules! impl_ring {
    ($($t:ty),*) => {
        $(
            impl Ring for $t {
                fn zero() -> Self {
                    <$t as num_traits::Zero>::zero()
                }

                fn one() -> Self {
                    <$t as num_traits::One>::one()
                }

                fn is_zero(&self) -> bool {
                    num_traits::Zero::is_zero(self)
                }

                fn is_one(&self) -> bool {
                    *self == <$t as num_traits::One>::one()
                }
            }
        )*
    };
}

impl_ring!(f32, f64, i32, i64, i128);

/// A multivariate polynomial representation usable in expansions.
pub trait Polynomial: Clone + Debug + Send + Sync {
    /// Coefficient ring.
    type Coeff: Ring;

    /// The monomial `coeff * q^exps` in `exps.num_vars()` variables.
    fn monomial(exps: &ExponentTuple, coeff: Self::Coeff) -> Self;

    /// The zero polynomial in `num_vars` variables.
    fn zero(num_vars: usize) -> Self;

    /// Number of variables.
    fn num_vars(&self) -> usize;

    /// Sum of two polynomials over the same variables.
    fn add(&self, other: &Self) -> Self;

    /// Product of two polynomials over the same variables.
    fn mul(&self, other: &Self) -> Self;

    /// Multiplies every coefficient by `c`.
    fn scale(&self, c: &Self::Coeff) -> Self;

    /// Moves variable `k` to variable `dims[k]` of a `num_vars`-variable
    /// space.
    fn embed(&self, dims: &[usize], num_vars: usize) -> Self;

    /// Evaluates at a point with one coordinate per variable.
    fn evaluate(&self, point: &[Self::Coeff]) -> Self::Coeff;
}
