//! Expansions: polynomials aligned with an index set.

use polychaos_index::{ExponentTuple, IndexSet};
use polychaos_poly::{Polynomial, Ring};
use rayon::prelude::*;

use crate::error::{ExpansionError, Mismatch};

/// An ordered collection of polynomials, one per tuple of an index set.
///
/// Polynomial `i` belongs to tuple `indices()[i]`. The pairing is fixed at
/// construction; no method changes one side without the other.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion<P> {
    indices: IndexSet,
    polys: Vec<P>,
}

/// One term of an expansion: a tuple and its polynomial.
#[derive(Clone, Copy, Debug)]
pub struct PolynomialTerm<'a, P> {
    /// The exponent tuple indexing the term.
    pub exponents: &'a ExponentTuple,
    /// The polynomial for that tuple.
    pub polynomial: &'a P,
}

impl<P: Polynomial> Expansion<P> {
    /// Pairs an index set with externally built polynomials, e.g. an
    /// orthogonal basis.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::TermCount`] if the lengths differ, and
    /// [`Mismatch::VariableCount`] if a polynomial does not live in
    /// `indices.dimensions()` variables.
    pub fn new(indices: IndexSet, polys: Vec<P>) -> Result<Self, ExpansionError> {
        if polys.len() != indices.len() {
            return Err(ExpansionError::TermCount {
                expected: indices.len(),
                got: polys.len(),
            });
        }
        if let Some(p) = polys.iter().find(|p| p.num_vars() != indices.dimensions()) {
            return Err(Mismatch::VariableCount {
                expected: indices.dimensions(),
                got: p.num_vars(),
            }
            .into());
        }

        Ok(Self { indices, polys })
    }

    /// The monomial expansion: term `i` is `q^indices[i]`.
    #[must_use]
    pub fn monomials(indices: IndexSet) -> Self {
        let one = <P::Coeff as Ring>::one();
        let polys = indices.iter().map(|t| P::monomial(t, one.clone())).collect();
        Self { indices, polys }
    }

    pub(crate) fn from_aligned(indices: IndexSet, polys: Vec<P>) -> Self {
        debug_assert_eq!(indices.len(), polys.len());
        Self { indices, polys }
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Number of variables.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.indices.dimensions()
    }

    /// The index set.
    #[must_use]
    pub fn indices(&self) -> &IndexSet {
        &self.indices
    }

    /// The polynomials, in index order.
    #[must_use]
    pub fn polynomials(&self) -> &[P] {
        &self.polys
    }

    /// Returns term `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<PolynomialTerm<'_, P>> {
        Some(PolynomialTerm {
            exponents: self.indices.get(i)?,
            polynomial: self.polys.get(i)?,
        })
    }

    /// Iterates over the terms in order.
    pub fn iter(&self) -> impl Iterator<Item = PolynomialTerm<'_, P>> + '_ {
        self.indices
            .iter()
            .zip(&self.polys)
            .map(|(exponents, polynomial)| PolynomialTerm { exponents, polynomial })
    }

    /// Position of the term indexed by `tuple`.
    #[must_use]
    pub fn position(&self, tuple: &ExponentTuple) -> Option<usize> {
        self.indices.position(tuple)
    }

    /// The polynomial indexed by `tuple`.
    #[must_use]
    pub fn term(&self, tuple: &ExponentTuple) -> Option<&P> {
        self.position(tuple).map(|i| &self.polys[i])
    }

    /// Evaluates every polynomial at one point.
    ///
    /// # Errors
    ///
    /// Returns [`Mismatch::VariableCount`] if the point has the wrong length.
    pub fn evaluate(&self, point: &[P::Coeff]) -> Result<Vec<P::Coeff>, ExpansionError> {
        self.check_point(point)?;
        Ok(self.polys.iter().map(|p| p.evaluate(point)).collect())
    }

    /// Evaluates every polynomial at every point; row `k` holds the values at
    /// `points[k]`.
    ///
    /// # Errors
    ///
    /// Returns [`Mismatch::VariableCount`] if any point has the wrong length.
    pub fn evaluate_many(&self, points: &[Vec<P::Coeff>]) -> Result<Vec<Vec<P::Coeff>>, ExpansionError> {
        for point in points {
            self.check_point(point)?;
        }
        Ok(points
            .par_iter()
            .map(|point| self.polys.iter().map(|p| p.evaluate(point)).collect())
            .collect())
    }

    /// The linear combination `Σ coeffs[i] * P_i`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::CoefficientCount`] if the lengths differ.
    pub fn combine(&self, coeffs: &[P::Coeff]) -> Result<P, ExpansionError> {
        if coeffs.len() != self.len() {
            return Err(ExpansionError::CoefficientCount {
                expected: self.len(),
                got: coeffs.len(),
            });
        }

        Ok(self
            .polys
            .iter()
            .zip(coeffs)
            .filter(|(_, c)| !c.is_zero())
            .fold(P::zero(self.dimensions()), |acc, (p, c)| acc.add(&p.scale(c))))
    }

    /// Consumes the expansion and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (IndexSet, Vec<P>) {
        (self.indices, self.polys)
    }

    fn check_point(&self, point: &[P::Coeff]) -> Result<(), ExpansionError> {
        if point.len() == self.dimensions() {
            Ok(())
        } else {
            Err(Mismatch::VariableCount {
                expected: self.dimensions(),
                got: point.len(),
            }
            .into())
        }
    }
}

/// Builds the monomial expansion of an index set.
///
/// Term `i` is `coefficients[i] * q^indices[i]`, or the bare monomial when no
/// coefficients are given.
///
/// # Errors
///
/// Returns [`ExpansionError::CoefficientCount`] if the coefficients are not
/// aligned with the index set.
pub fn build_expansion<P: Polynomial>(
    indices: &IndexSet,
    coefficients: Option<&[P::Coeff]>,
) -> Result<Expansion<P>, ExpansionError> {
    let Some(coeffs) = coefficients else {
        return Ok(Expansion::monomials(indices.clone()));
    };
    if coeffs.len() != indices.len() {
        return Err(ExpansionError::CoefficientCount {
            expected: indices.len(),
            got: coeffs.len(),
        });
    }

    let polys = indices
        .iter()
        .zip(coeffs)
        .map(|(t, c)| P::monomial(t, c.clone()))
        .collect();
    Ok(Expansion::from_aligned(indices.clone(), polys))
}

impl<'a, P: Polynomial> IntoIterator for &'a Expansion<P> {
    type Item = PolynomialTerm<'a, P>;
    type IntoIter = Box<dyn Iterator<Item = PolynomialTerm<'a, P>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychaos_index::{index_range, Ordering};
    use polychaos_poly::SparsePoly;

    fn t(exps: &[u32]) -> ExponentTuple {
        ExponentTuple::new(exps)
    }

    #[test]
    fn test_monomials() {
        let set = index_range(2, 0, 3).unwrap();
        let basis = build_expansion::<SparsePoly<i64>>(&set, None).unwrap();

        assert_eq!(basis.len(), set.len());
        for term in &basis {
            assert_eq!(term.polynomial, &SparsePoly::monomial(term.exponents.clone(), 1));
        }
        assert_eq!(basis.polynomials()[2].to_string(), "q1");
    }

    #[test]
    fn test_coefficients() {
        let set = index_range(1, 0, 3).unwrap();
        let expansion = build_expansion::<SparsePoly<f64>>(&set, Some(&[0.5, 2.0, -1.0])).unwrap();

        assert_eq!(expansion.polynomials()[1], SparsePoly::monomial(t(&[1]), 2.0));
        assert_eq!(expansion.evaluate(&[3.0]).unwrap(), vec![0.5, 6.0, -9.0]);
    }

    #[test]
    fn test_coefficient_count() {
        let set = index_range(2, 0, 2).unwrap();
        let err = build_expansion::<SparsePoly<f64>>(&set, Some(&[1.0])).unwrap_err();
        assert_eq!(err, ExpansionError::CoefficientCount { expected: 3, got: 1 });
    }

    #[test]
    fn test_combine() {
        let set = index_range(2, 0, 2).unwrap();
        let basis = build_expansion::<SparsePoly<i64>>(&set, None).unwrap();

        // 1 + 2 q0 - q1
        let p = basis.combine(&[1, 2, -1]).unwrap();
        assert_eq!(p.evaluate(&[5, 7]), 4);
        assert!(basis.combine(&[0, 0, 0]).unwrap().is_zero());
        assert!(matches!(basis.combine(&[1]), Err(ExpansionError::CoefficientCount { .. })));
    }

    #[test]
    fn test_evaluate_many() {
        let set = index_range(2, 0, 2).unwrap();
        let basis = build_expansion::<SparsePoly<i64>>(&set, None).unwrap();

        let rows = basis.evaluate_many(&[vec![2, 3], vec![-1, 4]]).unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![1, -1, 4]]);

        let err = basis.evaluate(&[1]).unwrap_err();
        assert_eq!(
            err,
            ExpansionError::DimensionMismatch(Mismatch::VariableCount { expected: 2, got: 1 })
        );
    }

    #[test]
    fn test_from_parts() {
        // Probabilists' Hermite polynomials 1, x, x^2 - 1.
        let set = index_range(1, 0, 3).unwrap();
        let hermite = vec![
            SparsePoly::one(1),
            SparsePoly::var(0, 1),
            SparsePoly::new(vec![(t(&[2]), 1.0), (t(&[0]), -1.0)], 1),
        ];
        let expansion = Expansion::new(set.clone(), hermite).unwrap();

        assert_eq!(expansion.term(&t(&[2])).unwrap().evaluate(&[2.0]), 3.0);
        assert_eq!(expansion.position(&t(&[1])), Some(1));

        let short = Expansion::new(set.clone(), vec![SparsePoly::<f64>::one(1)]);
        assert_eq!(short.unwrap_err(), ExpansionError::TermCount { expected: 3, got: 1 });

        let wide = Expansion::new(set, vec![SparsePoly::<f64>::one(2); 3]);
        assert_eq!(
            wide.unwrap_err(),
            ExpansionError::DimensionMismatch(Mismatch::VariableCount { expected: 1, got: 2 })
        );
    }

    #[test]
    fn test_alignment_follows_ordering() {
        let set = IndexSet::from_tuples(2, [t(&[1, 0]), t(&[0, 1])], Ordering::GradedReverse).unwrap();
        let basis = build_expansion::<SparsePoly<i64>>(&set, Some(&[10, 20])).unwrap();

        let first = basis.get(0).unwrap();
        assert_eq!(first.exponents, &t(&[0, 1]));
        assert_eq!(first.polynomial, &SparsePoly::monomial(t(&[0, 1]), 10));
    }
}
