//! Property-based tests for index generation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::enumerate::{count_range, generate_indices, index_range};
    use crate::monomial::ExponentTuple;
    use crate::ordering::Ordering;
    use crate::truncation::TruncationSpec;

    // Every tuple of `dims` dimensions with all exponents below `cap`.
    fn full_grid(dims: usize, cap: u32) -> Vec<ExponentTuple> {
        let mut grid = vec![ExponentTuple::zero(0)];
        for _ in 0..dims {
            grid = grid
                .iter()
                .flat_map(|t| {
                    (0..cap).map(move |e| t.iter().copied().chain(std::iter::once(e)).collect())
                })
                .collect();
        }
        grid
    }

    fn ordering() -> impl Strategy<Value = Ordering> {
        prop::sample::select(Ordering::ALL.to_vec())
    }

    // Norm orders, with the infinity norm mixed in.
    fn norm_order() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(1.0),
            Just(2.0),
            Just(f64::INFINITY),
            (0.3f64..3.0),
        ]
    }

    proptest! {
        #[test]
        fn total_order_membership(dims in 1usize..5, lo in 0u32..4, span in 0u32..4) {
            let hi = lo + span;
            let set = index_range(dims, lo, hi).unwrap();

            let mut seen = FxHashSet::default();
            for t in set.iter() {
                prop_assert_eq!(t.num_vars(), dims);
                prop_assert!(u64::from(lo) <= t.total_order() && t.total_order() < u64::from(hi));
                prop_assert!(seen.insert(t.clone()));
            }
            prop_assert_eq!(set.len() as u128, count_range(dims, lo, hi));
        }

        #[test]
        fn generation_is_deterministic(dims in 1usize..5, hi in 0u32..6, order in ordering()) {
            let spec = TruncationSpec::builder(dims, 0, hi).ordering(order).build().unwrap();
            prop_assert_eq!(generate_indices(&spec), generate_indices(&spec));
        }

        #[test]
        fn higher_order_extends_prefix(dims in 1usize..5, n in 1u32..6, order in ordering()) {
            let small = generate_indices(&TruncationSpec::builder(dims, 0, n - 1).ordering(order).build().unwrap());
            let large = generate_indices(&TruncationSpec::builder(dims, 0, n).ordering(order).build().unwrap());

            // Relative order of the smaller set is kept inside the larger one.
            let positions: Vec<usize> = small
                .iter()
                .map(|t| large.position(t).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            if order.is_graded() {
                prop_assert_eq!(&large.tuples()[..small.len()], small.tuples());
            }
        }

        #[test]
        fn exact_norm_matches_brute_force(
            dims in 1usize..4,
            lo in 0u32..3,
            span in 0u32..4,
            p in norm_order(),
            weights in prop::collection::vec(0.5f64..2.0, 3),
        ) {
            let hi = lo + span;
            let spec = TruncationSpec::builder(dims, lo, hi)
                .norm_order(p)
                .weights(weights[..dims].to_vec())
                .build()
                .unwrap();
            let set = generate_indices(&spec);

            // Any norm here is at least half the largest exponent, so every
            // admissible exponent is at most 2 * hi.
            let cap = 2 * hi + 1;
            let expected: FxHashSet<ExponentTuple> = full_grid(dims, cap)
                .into_iter()
                .filter(|t| spec.includes(t))
                .collect();
            let got: FxHashSet<ExponentTuple> = set.iter().cloned().collect();

            prop_assert_eq!(got, expected);
        }
    }
}
