//! Joining per-dimension expansions into one multivariate expansion.
//!
//! Each source expansion covers a disjoint subset of the target's
//! dimensions. For every target tuple, the tuple is restricted to each
//! source's dimensions, the matching source term is looked up, lifted into
//! the target's variables and the lifted terms are multiplied together.
//!
//! Work happens in three passes so that errors surface before any product
//! is formed:
//! 1. validate the dimension layout and resolve every lookup
//! 2. lift each referenced source term once
//! 3. form the products, in parallel for large targets

use polychaos_index::IndexSet;
use polychaos_poly::Polynomial;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{ExpansionError, Mismatch};
use crate::expansion::Expansion;

/// Tuning for [`join_expansions_with`].
#[derive(Clone, Debug)]
pub struct JoinConfig {
    /// Minimum number of target tuples to form products in parallel.
    pub parallel_threshold: usize,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}

/// A source expansion and the target dimensions it covers, in the order of
/// the source's own variables.
pub type JoinSource<'a, P> = (&'a Expansion<P>, &'a [usize]);

/// Joins per-dimension expansions over a target index set.
///
/// Term `i` of the result is the product, over all sources, of the source
/// term indexed by `target[i]` restricted to that source's dimensions.
///
/// # Errors
///
/// Returns [`ExpansionError::DimensionMismatch`] if the sources overlap,
/// leave a target dimension uncovered, name a dimension outside the target,
/// are assigned a different number of dimensions than they have, or lack a
/// term that the target requires.
pub fn join_expansions<P: Polynomial>(
    sources: &[JoinSource<'_, P>],
    target: &IndexSet,
) -> Result<Expansion<P>, ExpansionError> {
    join_expansions_with(sources, target, &JoinConfig::default())
}

/// Joins per-dimension expansions with explicit tuning.
///
/// # Errors
///
/// See [`join_expansions`].
pub fn join_expansions_with<P: Polynomial>(
    sources: &[JoinSource<'_, P>],
    target: &IndexSet,
    config: &JoinConfig,
) -> Result<Expansion<P>, ExpansionError> {
    let dims = target.dimensions();
    check_layout(sources, dims)?;

    // Pass 1: position of the matching term in every source.
    let mut selections: Vec<Vec<usize>> = Vec::with_capacity(target.len());
    for tuple in target {
        let picks = sources
            .iter()
            .enumerate()
            .map(|(position, (source, subset))| {
                let sub_tuple = tuple.restrict(subset);
                source
                    .position(&sub_tuple)
                    .ok_or(Mismatch::MissingTerm { position, sub_tuple })
            })
            .collect::<Result<Vec<_>, _>>()?;
        selections.push(picks);
    }

    // Pass 2: lift every referenced term into the target's variables.
    let mut lifted: FxHashMap<(usize, usize), P> = FxHashMap::default();
    for picks in &selections {
        for (k, &pos) in picks.iter().enumerate() {
            lifted.entry((k, pos)).or_insert_with(|| {
                let (source, subset) = sources[k];
                source.polynomials()[pos].embed(subset, dims)
            });
        }
    }

    tracing::debug!(
        sources = sources.len(),
        targets = target.len(),
        lifted = lifted.len(),
        "joining expansions"
    );

    // Pass 3: products.
    let product = |picks: &Vec<usize>| -> P {
        picks
            .iter()
            .enumerate()
            .map(|(k, &pos)| &lifted[&(k, pos)])
            .fold(None, |acc: Option<P>, p| match acc {
                None => Some(p.clone()),
                Some(acc) => Some(acc.mul(p)),
            })
            .unwrap_or_else(|| P::zero(dims))
    };

    let polys: Vec<P> = if selections.len() >= config.parallel_threshold {
        selections.par_iter().map(product).collect()
    } else {
        selections.iter().map(product).collect()
    };

    Ok(Expansion::from_aligned(target.clone(), polys))
}

/// Checks that the sources partition `0..dims`.
fn check_layout<P: Polynomial>(sources: &[JoinSource<'_, P>], dims: usize) -> Result<(), Mismatch> {
    let mut owner: Vec<Option<usize>> = vec![None; dims];

    for (position, (source, subset)) in sources.iter().enumerate() {
        if source.dimensions() != subset.len() {
            return Err(Mismatch::SourceDimensions {
                position,
                expected: source.dimensions(),
                got: subset.len(),
            });
        }
        for &dim in subset.iter() {
            let slot = owner
                .get_mut(dim)
                .ok_or(Mismatch::OutOfRange { dim, dimensions: dims })?;
            if slot.is_some() {
                return Err(Mismatch::Overlap { dim });
            }
            *slot = Some(position);
        }
    }

    match owner.iter().position(Option::is_none) {
        Some(dim) => Err(Mismatch::Uncovered { dim }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychaos_index::{index_range, ExponentTuple, Ordering};
    use polychaos_poly::SparsePoly;

    use crate::expansion::build_expansion;

    fn t(exps: &[u32]) -> ExponentTuple {
        ExponentTuple::new(exps)
    }

    fn univariate(order: u32) -> Expansion<SparsePoly<i64>> {
        build_expansion(&index_range(1, 0, order).unwrap(), None).unwrap()
    }

    #[test]
    fn test_join_monomials() {
        let x = univariate(3); // 1, x, x^2
        let y = univariate(2); // 1, y
        let target = IndexSet::from_tuples(
            2,
            [t(&[0, 0]), t(&[1, 0]), t(&[0, 1]), t(&[2, 0]), t(&[1, 1])],
            Ordering::GradedLexicographic,
        )
        .unwrap();

        let joined = join_expansions(&[(&x, &[0][..]), (&y, &[1][..])], &target).unwrap();

        let expected: Vec<SparsePoly<i64>> = vec![
            SparsePoly::one(2),
            SparsePoly::var(0, 2),
            SparsePoly::var(1, 2),
            SparsePoly::monomial(t(&[2, 0]), 1),
            SparsePoly::monomial(t(&[1, 1]), 1),
        ];
        assert_eq!(joined.polynomials(), expected.as_slice());
        assert_eq!(joined.indices(), &target);
    }

    #[test]
    fn test_join_orthogonal_factors() {
        // Hermite-style factors: 1, x, x^2 - 1
        let set = index_range(1, 0, 3).unwrap();
        let he = Expansion::new(
            set,
            vec![
                SparsePoly::one(1),
                SparsePoly::var(0, 1),
                SparsePoly::new(vec![(t(&[2]), 1i64), (t(&[0]), -1)], 1),
            ],
        )
        .unwrap();

        let target = index_range(2, 0, 3).unwrap();
        let joined = join_expansions(&[(&he, &[0][..]), (&he, &[1][..])], &target).unwrap();

        // (2,0) -> x^2 - 1, (1,1) -> x y
        let p20 = joined.term(&t(&[2, 0])).unwrap();
        assert_eq!(p20.evaluate(&[3, 5]), 8);
        let p11 = joined.term(&t(&[1, 1])).unwrap();
        assert_eq!(p11.evaluate(&[3, 5]), 15);
        let p02 = joined.term(&t(&[0, 2])).unwrap();
        assert_eq!(p02.evaluate(&[3, 5]), 24);
    }

    #[test]
    fn test_join_permuted_subset() {
        // A bivariate source placed on target dimensions (2, 0).
        let xy = build_expansion::<SparsePoly<i64>>(&index_range(2, 0, 2).unwrap(), None).unwrap();
        let z = univariate(2);
        let target = IndexSet::from_tuples(3, [t(&[1, 1, 0]), t(&[0, 0, 1])], Ordering::default()).unwrap();

        let joined = join_expansions(&[(&xy, &[2, 0][..]), (&z, &[1][..])], &target).unwrap();

        // (1,1,0): source sub-tuple (0,1) -> its second variable, now q0; times z -> q1
        assert_eq!(joined.term(&t(&[1, 1, 0])).unwrap(), &SparsePoly::monomial(t(&[1, 1, 0]), 1));
        assert_eq!(joined.term(&t(&[0, 0, 1])).unwrap(), &SparsePoly::var(2, 3));
    }

    #[test]
    fn test_missing_term() {
        let x = univariate(2); // 1, x
        let y = univariate(2);
        let target = index_range(2, 0, 3).unwrap();

        let err = join_expansions(&[(&x, &[0][..]), (&y, &[1][..])], &target).unwrap_err();
        assert_eq!(
            err,
            ExpansionError::DimensionMismatch(Mismatch::MissingTerm {
                position: 0,
                sub_tuple: t(&[2]),
            })
        );
    }

    #[test]
    fn test_layout_errors() {
        let x = univariate(2);
        let target = index_range(2, 0, 2).unwrap();

        let overlap = join_expansions(&[(&x, &[0][..]), (&x, &[0][..])], &target);
        assert_eq!(overlap.unwrap_err(), ExpansionError::from(Mismatch::Overlap { dim: 0 }));

        let uncovered = join_expansions(&[(&x, &[1][..])], &target);
        assert_eq!(uncovered.unwrap_err(), ExpansionError::from(Mismatch::Uncovered { dim: 0 }));

        let out_of_range = join_expansions(&[(&x, &[0][..]), (&x, &[2][..])], &target);
        assert_eq!(
            out_of_range.unwrap_err(),
            ExpansionError::from(Mismatch::OutOfRange { dim: 2, dimensions: 2 })
        );

        let arity = join_expansions(&[(&x, &[0, 1][..])], &target);
        assert_eq!(
            arity.unwrap_err(),
            ExpansionError::from(Mismatch::SourceDimensions {
                position: 0,
                expected: 1,
                got: 2,
            })
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let x = univariate(6);
        let y = univariate(6);
        let target = index_range(2, 0, 6).unwrap();
        let sources = [(&x, &[0][..]), (&y, &[1][..])];

        let parallel = join_expansions_with(&sources, &target, &JoinConfig { parallel_threshold: 0 }).unwrap();
        let sequential =
            join_expansions_with(&sources, &target, &JoinConfig { parallel_threshold: usize::MAX }).unwrap();

        assert_eq!(parallel, sequential);
        // Joining univariate monomials reproduces the bivariate monomials.
        assert_eq!(parallel, build_expansion::<SparsePoly<i64>>(&target, None).unwrap());
    }

    #[test]
    fn test_sources_unchanged() {
        let x = univariate(3);
        let before = x.clone();
        let target = index_range(1, 0, 3).unwrap();

        let joined = join_expansions(&[(&x, &[0][..])], &target).unwrap();
        assert_eq!(x, before);
        assert_eq!(joined, x);
    }
}
