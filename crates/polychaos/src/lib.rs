//! # polychaos
//!
//! Polynomial chaos expansion bases.
//!
//! This crate re-exports the polychaos workspace:
//! - [`index`]: exponent tuples, truncation norms, orderings and index set
//!   enumeration
//! - [`poly`]: the `Ring` and `Polynomial` traits and `SparsePoly`
//! - [`expansion`]: expansions over index sets and per-dimension joins
//!
//! ## Example
//!
//! ```rust
//! use polychaos::prelude::*;
//!
//! let spec = TruncationSpec::builder(2, 0, 3).build()?;
//! let basis = monomial_basis(&spec);
//!
//! let rendered: Vec<String> = basis.polynomials().iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["1.0", "q0", "q1", "q0^2", "q0*q1", "q1^2"]);
//! # Ok::<(), IndexError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polychaos_expansion as expansion;
pub use polychaos_index as index;
pub use polychaos_poly as poly;

use polychaos_expansion::Expansion;
use polychaos_index::{generate_indices, TruncationSpec};
use polychaos_poly::SparsePoly;

/// The monomial basis `q^x` for every tuple `x` selected by `spec`, in
/// `spec.ordering()` order.
#[must_use]
pub fn monomial_basis(spec: &TruncationSpec) -> Expansion<SparsePoly<f64>> {
    Expansion::monomials(generate_indices(spec))
}

/// Commonly used items.
pub mod prelude {
    pub use crate::monomial_basis;
    pub use polychaos_expansion::{
        build_expansion, join_expansions, join_expansions_with, Expansion, ExpansionError, JoinConfig,
        Mismatch,
    };
    pub use polychaos_index::{
        generate_indices, generate_indices_with, index_range, norm, EnumerationConfig, ExponentTuple,
        IndexError, IndexSet, Ordering, TruncationNorm, TruncationSpec,
    };
    pub use polychaos_poly::{Polynomial, Ring, SparsePoly};
}
