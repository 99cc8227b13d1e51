//! Truncation specs: everything that determines an index set.

use crate::error::IndexError;
use crate::norm::TruncationNorm;
use crate::ordering::Ordering;

/// A validated, immutable description of an index set.
///
/// Tuples `x` of length `dimensions` are included iff
/// `lower <= norm(x) < upper`, and the result is sorted by `ordering`.
#[derive(Clone, Debug, PartialEq)]
pub struct TruncationSpec {
    dimensions: usize,
    lower: u32,
    upper: u32,
    norm: TruncationNorm,
    ordering: Ordering,
}

impl TruncationSpec {
    /// Total-order truncation `lower <= |x|_1 < upper` in graded
    /// lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidDimension`] if `dimensions == 0` and
    /// [`IndexError::InvalidBound`] if `lower > upper`.
    pub fn new(dimensions: usize, lower: u32, upper: u32) -> Result<Self, IndexError> {
        Self::builder(dimensions, lower, upper).build()
    }

    /// Starts a builder with the given bounds and default options.
    #[must_use]
    pub fn builder(dimensions: usize, lower: u32, upper: u32) -> TruncationSpecBuilder {
        TruncationSpecBuilder {
            dimensions,
            lower,
            upper,
            norm_order: 1.0,
            weights: None,
            dimension_bounds: None,
            ordering: Ordering::default(),
        }
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Inclusive lower bound on the norm.
    #[must_use]
    pub fn lower(&self) -> u32 {
        self.lower
    }

    /// Exclusive upper bound on the norm.
    #[must_use]
    pub fn upper(&self) -> u32 {
        self.upper
    }

    /// The truncation norm.
    #[must_use]
    pub fn norm(&self) -> &TruncationNorm {
        &self.norm
    }

    /// The ordering of the generated index set.
    #[must_use]
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Returns true if the range `[lower, upper)` is empty.
    #[must_use]
    pub fn is_empty_range(&self) -> bool {
        self.lower >= self.upper
    }

    /// Returns true if `exps` belongs to the index set.
    #[must_use]
    pub fn includes(&self, exps: &[u32]) -> bool {
        exps.len() == self.dimensions && self.norm.contains(exps, self.lower, self.upper)
    }
}

/// Builder for [`TruncationSpec`]; validation happens in [`build`].
///
/// [`build`]: TruncationSpecBuilder::build
#[derive(Clone, Debug)]
#[must_use]
pub struct TruncationSpecBuilder {
    dimensions: usize,
    lower: u32,
    upper: u32,
    norm_order: f64,
    weights: Option<Vec<f64>>,
    dimension_bounds: Option<Vec<u32>>,
    ordering: Ordering,
}

impl TruncationSpecBuilder {
    /// Sets the norm order `p` (`f64::INFINITY` for the max norm).
    pub fn norm_order(mut self, order: f64) -> Self {
        self.norm_order = order;
        self
    }

    /// Sets per-dimension weights applied before the norm.
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Sets an exclusive upper bound per dimension.
    ///
    /// Replaces the upper bound with `max(bounds)` and weights each
    /// dimension by `max(bounds) / bounds[i]`. Under the infinity norm this
    /// selects exactly the grid `x_i < bounds[i]`.
    pub fn dimension_bounds(mut self, bounds: &[u32]) -> Self {
        self.dimension_bounds = Some(bounds.to_vec());
        self
    }

    /// Sets the ordering.
    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Validates the options and builds a [`TruncationSpec`].
    ///
    /// # Errors
    ///
    /// - [`IndexError::InvalidDimension`] if `dimensions == 0` or the
    ///   per-dimension bounds have the wrong length
    /// - [`IndexError::InvalidBound`] if `lower > upper`
    /// - [`IndexError::ZeroDimensionBound`] if a per-dimension bound is zero
    /// - [`IndexError::InvalidNorm`] for a bad norm order or weights, or if
    ///   both weights and per-dimension bounds are given
    pub fn build(self) -> Result<TruncationSpec, IndexError> {
        if self.dimensions == 0 {
            return Err(IndexError::zero_dimensions());
        }

        let (upper, weights) = match self.dimension_bounds {
            None => (self.upper, self.weights),
            Some(_) if self.weights.is_some() => {
                return Err(IndexError::InvalidNorm(
                    "weights and per-dimension bounds are mutually exclusive".to_string(),
                ));
            }
            Some(bounds) => {
                if bounds.len() != self.dimensions {
                    return Err(IndexError::InvalidDimension {
                        expected: self.dimensions,
                        got: bounds.len(),
                    });
                }
                if let Some(dim) = bounds.iter().position(|&b| b == 0) {
                    return Err(IndexError::ZeroDimensionBound { dim });
                }
                let max = bounds.iter().copied().max().unwrap_or(0);
                let weights = bounds.iter().map(|&b| f64::from(max) / f64::from(b)).collect();
                (max, Some(weights))
            }
        };

        if self.lower > upper {
            return Err(IndexError::InvalidBound {
                lower: self.lower,
                upper,
            });
        }

        let norm = TruncationNorm::new(self.dimensions, self.norm_order, weights)?;

        Ok(TruncationSpec {
            dimensions: self.dimensions,
            lower: self.lower,
            upper,
            norm,
            ordering: self.ordering,
        })
    }
}
