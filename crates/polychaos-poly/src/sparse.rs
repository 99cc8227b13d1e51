//! Sparse multivariate polynomials.
//!
//! Terms are stored as (exponent tuple, coefficient) pairs sorted with the
//! leading term first under graded lexicographic order, with like terms
//! combined and zero coefficients dropped.

use std::cmp;
use std::fmt;

use polychaos_index::{ExponentTuple, Ordering};

use crate::traits::{Polynomial, Ring};

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms, leading term first.
    terms: Vec<(ExponentTuple, R)>,
    /// Number of variables.
    num_vars: usize,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are sorted and like terms combined.
    ///
    /// # Panics
    ///
    /// Panics if a term does not have `num_vars` exponents.
    #[must_use]
    pub fn new(terms: Vec<(ExponentTuple, R)>, num_vars: usize) -> Self {
        assert!(terms.iter().all(|(m, _)| m.num_vars() == num_vars));
        let mut poly = Self { terms, num_vars };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self::constant(R::one(), num_vars)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize) -> Self {
        Self::monomial(ExponentTuple::zero(num_vars), c)
    }

    /// Creates a single variable q_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        Self::monomial(ExponentTuple::var(i, num_vars), R::one())
    }

    /// Creates the monomial `c * q^exps`.
    #[must_use]
    pub fn monomial(exps: ExponentTuple, c: R) -> Self {
        let num_vars = exps.num_vars();
        if c.is_zero() {
            Self::zero(num_vars)
        } else {
            Self {
                terms: vec![(exps, c)],
                num_vars,
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[(ExponentTuple, R)] {
        &self.terms
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        self.terms.sort_by(|a, b| descending(&a.0, &b.0));

        let mut merged: Vec<(ExponentTuple, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());

        self.terms = merged;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);

        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());

        Self::new(terms, self.num_vars)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());

        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars);
        }

        Self {
            terms: self.terms.iter().map(|(m, x)| (m.clone(), x.clone() * c.clone())).collect(),
            num_vars: self.num_vars,
        }
    }

    /// Moves variable `k` to variable `dims[k]` of a `num_vars`-variable
    /// space.
    ///
    /// # Panics
    ///
    /// Panics if `dims` does not name one target per variable.
    #[must_use]
    pub fn embed(&self, dims: &[usize], num_vars: usize) -> Self {
        assert_eq!(dims.len(), self.num_vars);

        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.embed(dims, num_vars), c.clone()))
            .collect();

        Self::new(terms, num_vars)
    }

    /// Evaluates the polynomial at a point.
    ///
    /// # Panics
    ///
    /// Panics if the point does not have one coordinate per variable.
    #[must_use]
    pub fn evaluate(&self, point: &[R]) -> R {
        assert_eq!(point.len(), self.num_vars);

        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let term = m
                .iter()
                .zip(point)
                .filter(|&(&e, _)| e > 0)
                .fold(c.clone(), |t, (&e, x)| t * x.pow(e));
            acc + term
        })
    }
}

/// Graded lexicographic, largest first.
fn descending(a: &ExponentTuple, b: &ExponentTuple) -> cmp::Ordering {
    Ordering::GradedLexicographic.compare(b, a)
}

impl<R: Ring> Polynomial for SparsePoly<R> {
    type Coeff = R;

    fn monomial(exps: &ExponentTuple, coeff: R) -> Self {
        SparsePoly::monomial(exps.clone(), coeff)
    }

    fn zero(num_vars: usize) -> Self {
        SparsePoly::zero(num_vars)
    }

    fn num_vars(&self) -> usize {
        self.num_vars
    }

    fn add(&self, other: &Self) -> Self {
        SparsePoly::add(self, other)
    }

    fn mul(&self, other: &Self) -> Self {
        SparsePoly::mul(self, other)
    }

    fn scale(&self, c: &R) -> Self {
        SparsePoly::scale(self, c)
    }

    fn embed(&self, dims: &[usize], num_vars: usize) -> Self {
        SparsePoly::embed(self, dims, num_vars)
    }

    fn evaluate(&self, point: &[R]) -> R {
        SparsePoly::evaluate(self, point)
    }
}

impl<R: Ring> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                let mon = m.to_monomial_string();
                if mon == "1" {
                    format!("{c:?}")
                } else if c.is_one() {
                    mon
                } else {
                    format!("{c:?}*{mon}")
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
