//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polychaos_index::ExponentTuple;

    use crate::sparse::SparsePoly;

    const VARS: usize = 2;

    fn small_term() -> impl Strategy<Value = (ExponentTuple, i64)> {
        (prop::collection::vec(0u32..4, VARS), -20i64..20)
            .prop_map(|(exps, c)| (ExponentTuple::from(exps), c))
    }

    // Strategy for generating small polynomials (up to 5 terms)
    fn small_poly() -> impl Strategy<Value = SparsePoly<i64>> {
        prop::collection::vec(small_term(), 0..=5).prop_map(|terms| SparsePoly::new(terms, VARS))
    }

    fn point() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-3i64..4, VARS)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = SparsePoly::one(VARS);
            prop_assert_eq!(a.mul(&one), a.clone());
        }

        #[test]
        fn evaluation_is_a_homomorphism(a in small_poly(), b in small_poly(), x in point()) {
            prop_assert_eq!(a.mul(&b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
            prop_assert_eq!(a.add(&b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        }

        #[test]
        fn embed_preserves_evaluation(a in small_poly(), x in point(), pad in -5i64..5) {
            // Variables 0 and 1 move to positions 3 and 1 of four.
            let lifted = a.embed(&[3, 1], 4);
            let wide = vec![pad, x[1], pad, x[0]];
            prop_assert_eq!(lifted.evaluate(&wide), a.evaluate(&x));
        }
    }
}
