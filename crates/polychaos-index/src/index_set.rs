//! Ordered sets of exponent tuples.

use std::ops::Index;

use rustc_hash::FxHashSet;

use crate::error::IndexError;
use crate::monomial::ExponentTuple;
use crate::ordering::Ordering;

/// An ordered sequence of distinct exponent tuples of one dimensionality.
///
/// The position of a tuple is the position of the matching coefficient in
/// any coefficient array aligned with the set.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IndexSet {
    dimensions: usize,
    ordering: Ordering,
    tuples: Vec<ExponentTuple>,
}

impl IndexSet {
    /// Creates an empty index set.
    #[must_use]
    pub fn empty(dimensions: usize, ordering: Ordering) -> Self {
        Self {
            dimensions,
            ordering,
            tuples: Vec::new(),
        }
    }

    /// Builds an index set from arbitrary tuples, sorted by `ordering`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidDimension`] if `dimensions == 0` or a
    /// tuple has the wrong length, and [`IndexError::DuplicateIndex`] if a
    /// tuple repeats.
    pub fn from_tuples<I>(dimensions: usize, tuples: I, ordering: Ordering) -> Result<Self, IndexError>
    where
        I: IntoIterator,
        I::Item: Into<ExponentTuple>,
    {
        if dimensions == 0 {
            return Err(IndexError::zero_dimensions());
        }

        let tuples: Vec<ExponentTuple> = tuples.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for t in &tuples {
            if t.num_vars() != dimensions {
                return Err(IndexError::InvalidDimension {
                    expected: dimensions,
                    got: t.num_vars(),
                });
            }
            if !seen.insert(t) {
                return Err(IndexError::DuplicateIndex(t.clone()));
            }
        }

        let mut tuples = tuples;
        ordering.sort(&mut tuples);

        Ok(Self {
            dimensions,
            ordering,
            tuples,
        })
    }

    /// Wraps tuples that are already distinct and sorted by `ordering`.
    pub(crate) fn from_sorted(dimensions: usize, ordering: Ordering, tuples: Vec<ExponentTuple>) -> Self {
        debug_assert!(tuples
            .windows(2)
            .all(|w| ordering.compare(&w[0], &w[1]) == std::cmp::Ordering::Less));
        Self {
            dimensions,
            ordering,
            tuples,
        }
    }

    /// Number of dimensions of every tuple.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The ordering of the set.
    #[must_use]
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Number of tuples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns true if the set has no tuples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns the tuples in order.
    #[must_use]
    pub fn tuples(&self) -> &[ExponentTuple] {
        &self.tuples
    }

    /// Iterates over the tuples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExponentTuple> {
        self.tuples.iter()
    }

    /// Returns the tuple at `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&ExponentTuple> {
        self.tuples.get(i)
    }

    /// Position of `tuple`, found by binary search under the set's ordering.
    #[must_use]
    pub fn position(&self, tuple: &ExponentTuple) -> Option<usize> {
        if tuple.num_vars() != self.dimensions {
            return None;
        }
        self.tuples
            .binary_search_by(|probe| self.ordering.compare(probe, tuple))
            .ok()
    }

    /// Returns true if the set holds `tuple`.
    #[must_use]
    pub fn contains(&self, tuple: &ExponentTuple) -> bool {
        self.position(tuple).is_some()
    }

    /// Returns the same tuples sorted by another ordering.
    #[must_use]
    pub fn reordered(&self, ordering: Ordering) -> Self {
        let mut tuples = self.tuples.clone();
        ordering.sort(&mut tuples);
        Self {
            dimensions: self.dimensions,
            ordering,
            tuples,
        }
    }
}

impl Index<usize> for IndexSet {
    type Output = ExponentTuple;

    fn index(&self, i: usize) -> &ExponentTuple {
        &self.tuples[i]
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = &'a ExponentTuple;
    type IntoIter = std::slice::Iter<'a, ExponentTuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}
