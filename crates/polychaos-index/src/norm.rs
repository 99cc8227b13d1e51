//! Truncation norms.
//!
//! A truncation norm decides which exponent tuples belong to a basis. The
//! plain total order (norm order 1, no weights) is the common case and is
//! evaluated exactly in integers. Other norms are evaluated in `f64`:
//!
//! - order `p` finite: `(Σ (w_i x_i)^p)^(1/p)`; `p < 1` gives hyperbolic
//!   cross truncation, stricter than total order
//! - order `+inf`: `max(w_i x_i)`
//!
//! Enumeration is two-phase. [`TruncationNorm::shell_window`] bounds the
//! total orders any admissible tuple can have and
//! [`TruncationNorm::exponent_caps`] bounds each coordinate. The enumerator
//! generates the tuples in that window, pruning partial tuples whose norm
//! already reaches the upper bound, and [`TruncationNorm::contains`] keeps
//! the ones whose exact norm is in range.
//! For the plain total order the window is the bound range itself and the
//! second phase is skipped.

use std::ops::Range;

use crate::error::IndexError;

/// Relative tolerance applied when comparing a floating-point norm with a
/// bound.
pub const NORM_TOLERANCE: f64 = 1e-10;

/// A validated truncation norm.
#[derive(Clone, Debug, PartialEq)]
pub struct TruncationNorm {
    order: f64,
    weights: Option<Vec<f64>>,
}

impl TruncationNorm {
    /// The total-order norm: the sum of exponents.
    #[must_use]
    pub const fn total_order() -> Self {
        Self {
            order: 1.0,
            weights: None,
        }
    }

    /// Creates a norm of the given order, with optional per-dimension
    /// weights.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidNorm`] if the order is not positive, or
    /// if the weights have the wrong length or are not positive and finite.
    pub fn new(dimensions: usize, order: f64, weights: Option<Vec<f64>>) -> Result<Self, IndexError> {
        if order.is_nan() || order <= 0.0 {
            return Err(IndexError::InvalidNorm(format!("norm order must be positive, got {order}")));
        }

        if let Some(w) = &weights {
            if w.len() != dimensions {
                return Err(IndexError::InvalidNorm(format!(
                    "expected {dimensions} weights, got {}",
                    w.len()
                )));
            }
            if let Some(bad) = w.iter().find(|x| !x.is_finite() || **x <= 0.0) {
                return Err(IndexError::InvalidNorm(format!(
                    "weights must be positive and finite, got {bad}"
                )));
            }
        }

        // Unit weights are the unweighted norm.
        let weights = weights.filter(|w| w.iter().any(|&x| (x - 1.0).abs() > f64::EPSILON));

        Ok(Self { order, weights })
    }

    /// The norm order `p`.
    #[must_use]
    pub fn order(&self) -> f64 {
        self.order
    }

    /// The per-dimension weights, if any.
    #[must_use]
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Returns true if this is the plain total order, evaluated exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_total_order(&self) -> bool {
        self.order == 1.0 && self.weights.is_none()
    }

    fn weight(&self, i: usize) -> f64 {
        self.weights.as_ref().map_or(1.0, |w| w[i])
    }

    /// Evaluates the norm of an exponent tuple.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, exps: &[u32]) -> f64 {
        let scaled = exps.iter().enumerate().map(|(i, &e)| f64::from(e) * self.weight(i));

        if self.order.is_infinite() {
            scaled.fold(0.0, f64::max)
        } else if self.order == 1.0 {
            scaled.sum()
        } else if self.order == 2.0 {
            scaled.map(|x| x * x).sum::<f64>().sqrt()
        } else {
            let p = self.order;
            scaled.map(|x| x.powf(p)).sum::<f64>().powf(p.recip())
        }
    }

    /// Returns true if `lower <= norm(exps) < upper`.
    #[must_use]
    pub fn contains(&self, exps: &[u32], lower: u32, upper: u32) -> bool {
        if self.is_total_order() {
            let s: u64 = exps.iter().map(|&e| u64::from(e)).sum();
            return u64::from(lower) <= s && s < u64::from(upper);
        }

        let n = self.evaluate(exps);
        let lo = f64::from(lower);
        let hi = f64::from(upper);
        n >= lo - NORM_TOLERANCE * lo.max(1.0) && n < hi - NORM_TOLERANCE * hi.max(1.0)
    }

    /// Range of total orders that can hold a tuple with norm in
    /// `[lower, upper)`.
    ///
    /// For `p >= 1`, `d^(1/p - 1) |x|_1 <= |x|_p <= |x|_1`; for `p < 1` the
    /// inequalities flip. Weights scale the norm by at most their extremes.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn shell_window(&self, dimensions: usize, lower: u32, upper: u32) -> Range<u32> {
        if self.is_total_order() {
            return lower..upper;
        }

        let d = dimensions as f64;
        let (w_min, w_max) = self.weights.as_ref().map_or((1.0, 1.0), |w| {
            w.iter()
                .fold((f64::INFINITY, 0.0_f64), |(lo, hi), &x| (lo.min(x), hi.max(x)))
        });

        // |x|_p <= above * |x|_1 and |x|_p >= below * |x|_1
        let (above, below) = if self.order.is_infinite() {
            (1.0, d.recip())
        } else if self.order >= 1.0 {
            (1.0, d.powf(self.order.recip() - 1.0))
        } else {
            (d.powf(self.order.recip() - 1.0), 1.0)
        };

        let slack = 1.0 + NORM_TOLERANCE;
        let start = (f64::from(lower) / (w_max * above * slack)).floor();
        let end = (f64::from(upper) * slack / (w_min * below)).floor() + 1.0;

        let cap = f64::from(u32::MAX);
        start.clamp(0.0, cap) as u32..end.clamp(0.0, cap) as u32
    }

    /// Largest exponent each dimension can take in a tuple with norm below
    /// `upper`.
    ///
    /// Every norm of order `p > 0` satisfies `|w x|_p >= w_i x_i`, so
    /// `x_i <= upper / w_i`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn exponent_caps(&self, dimensions: usize, upper: u32) -> Vec<u32> {
        let reach = f64::from(upper) * (1.0 + NORM_TOLERANCE);
        let cap = f64::from(u32::MAX);
        (0..dimensions)
            .map(|i| (reach / self.weight(i)).floor().clamp(0.0, cap) as u32)
            .collect()
    }

    /// Value the running accumulator must stay below for a tuple to have a
    /// norm below `upper`. Slightly generous, so pruning on it never drops
    /// an admissible tuple.
    pub(crate) fn budget(&self, upper: u32) -> f64 {
        let reach = f64::from(upper) * (1.0 + NORM_TOLERANCE);
        if self.order.is_infinite() {
            reach
        } else {
            reach.powf(self.order)
        }
    }

    /// Folds exponent `e` of dimension `i` into a running accumulator:
    /// `acc + (w_i e)^p`, or `max(acc, w_i e)` for the max norm.
    ///
    /// Monotone in `e`, so callers may stop at the first `e` that reaches
    /// the budget.
    #[allow(clippy::float_cmp)]
    pub(crate) fn accumulate(&self, acc: f64, i: usize, e: u32) -> f64 {
        let x = f64::from(e) * self.weight(i);
        if self.order.is_infinite() {
            acc.max(x)
        } else if self.order == 1.0 {
            acc + x
        } else {
            acc + x.powf(self.order)
        }
    }
}

impl Default for TruncationNorm {
    fn default() -> Self {
        Self::total_order()
    }
}

/// Evaluates a norm of order `order` on `exps`, with optional weights.
///
/// # Errors
///
/// Returns [`IndexError::InvalidNorm`] for a non-positive order or malformed
/// weights.
pub fn norm(exps: &[u32], order: f64, weights: Option<&[f64]>) -> Result<f64, IndexError> {
    let norm = TruncationNorm::new(exps.len(), order, weights.map(<[f64]>::to_vec))?;
    Ok(norm.evaluate(exps))
}
