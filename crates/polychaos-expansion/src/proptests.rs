//! Property-based tests for expansion joins.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polychaos_index::{generate_indices, index_range, TruncationSpec};
    use polychaos_poly::SparsePoly;

    use crate::expansion::{build_expansion, Expansion};
    use crate::join::{join_expansions, JoinSource};

    fn univariate(order: u32) -> Expansion<SparsePoly<i64>> {
        build_expansion(&index_range(1, 0, order).unwrap(), None).unwrap()
    }

    fn point(dims: usize) -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-3i64..4, dims)
    }

    proptest! {
        #[test]
        fn join_of_monomials_is_monomial_basis(dims in 1usize..4, upper in 1u32..5, p in 0.4f64..2.5) {
            let spec = TruncationSpec::builder(dims, 0, upper).norm_order(p).build().unwrap();
            let target = generate_indices(&spec);

            let factor = univariate(upper);
            let subsets: Vec<[usize; 1]> = (0..dims).map(|k| [k]).collect();
            let sources: Vec<JoinSource<'_, _>> = subsets.iter().map(|s| (&factor, &s[..])).collect();

            let joined = join_expansions(&sources, &target).unwrap();
            prop_assert_eq!(joined, build_expansion::<SparsePoly<i64>>(&target, None).unwrap());
        }

        #[test]
        fn joined_terms_factor_at_points(pt in point(2), upper in 1u32..5) {
            // Shifted monomials (x + 1)^n make the factors non-trivial.
            let set = index_range(1, 0, upper).unwrap();
            let shifted: Vec<SparsePoly<i64>> = (0..upper)
                .map(|n| {
                    let base = SparsePoly::<i64>::var(0, 1).add(&SparsePoly::one(1));
                    (0..n).fold(SparsePoly::one(1), |acc, _| acc.mul(&base))
                })
                .collect();
            let factor = Expansion::new(set, shifted).unwrap();

            let target = index_range(2, 0, upper).unwrap();
            let joined = join_expansions(&[(&factor, &[1][..]), (&factor, &[0][..])], &target).unwrap();

            for term in &joined {
                let expected = (pt[0] + 1).pow(term.exponents[0]) * (pt[1] + 1).pow(term.exponents[1]);
                prop_assert_eq!(term.polynomial.evaluate(&pt), expected);
            }
        }

        #[test]
        fn combine_is_linear(a in prop::collection::vec(-5i64..5, 6), b in prop::collection::vec(-5i64..5, 6)) {
            let basis = build_expansion::<SparsePoly<i64>>(&index_range(2, 0, 3).unwrap(), None).unwrap();
            let sum: Vec<i64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();

            let lhs = basis.combine(&a).unwrap().add(&basis.combine(&b).unwrap());
            prop_assert_eq!(lhs, basis.combine(&sum).unwrap());
        }
    }
}
