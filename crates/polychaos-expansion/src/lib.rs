//! # polychaos-expansion
//!
//! Polynomial expansions over multi-index sets.
//!
//! This crate provides:
//! - `Expansion`: polynomials aligned one-to-one with an index set
//! - Monomial expansions built directly from an index set, optionally with
//!   per-term coefficients
//! - Joins of per-dimension expansions (e.g. univariate orthogonal
//!   families) into one multivariate expansion
//!
//! ## Example
//!
//! ```rust
//! use polychaos_expansion::{build_expansion, join_expansions};
//! use polychaos_index::{index_range, IndexSet, Ordering};
//! use polychaos_poly::SparsePoly;
//!
//! let x = build_expansion::<SparsePoly<f64>>(&index_range(1, 0, 3)?, None)?;
//! let y = build_expansion::<SparsePoly<f64>>(&index_range(1, 0, 2)?, None)?;
//!
//! let target = IndexSet::from_tuples(
//!     2,
//!     [[0u32, 0], [1, 0], [0, 1], [2, 0], [1, 1]],
//!     Ordering::default(),
//! )?;
//! let joined = join_expansions(&[(&x, &[0][..]), (&y, &[1][..])], &target)?;
//!
//! let rendered: Vec<String> = joined.polynomials().iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["1.0", "q0", "q1", "q0^2", "q0*q1"]);
//! # Ok::<(), polychaos_expansion::ExpansionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod expansion;
pub mod join;

#[cfg(test)]
mod proptests;

pub use error::{ExpansionError, Mismatch};
pub use expansion::{build_expansion, Expansion, PolynomialTerm};
pub use join::{join_expansions, join_expansions_with, JoinConfig, JoinSource};
