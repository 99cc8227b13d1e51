//! # polychaos-index
//!
//! Multi-index machinery for polynomial chaos bases.
//!
//! This crate provides:
//! - Exponent tuples with inline storage
//! - Orderings: graded lexicographic (default), graded reverse,
//!   lexicographic and reverse
//! - Truncation norms: total order, `L_p` (including hyperbolic cross with
//!   `p < 1`), max norm, per-dimension weights and bounds
//! - Shell-based enumeration of index sets, parallel for large sets
//!
//! ## Example
//!
//! ```rust
//! use polychaos_index::{generate_indices, TruncationSpec};
//!
//! let spec = TruncationSpec::builder(2, 0, 3).build()?;
//! let set = generate_indices(&spec);
//!
//! let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["(0, 0)", "(1, 0)", "(0, 1)", "(2, 0)", "(1, 1)", "(0, 2)"]);
//! # Ok::<(), polychaos_index::IndexError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod enumerate;
pub mod error;
pub mod index_set;
pub mod monomial;
pub mod norm;
pub mod ordering;
pub mod truncation;

#[cfg(test)]
mod proptests;

pub use enumerate::{generate_indices, generate_indices_with, index_range, EnumerationConfig};
pub use error::IndexError;
pub use index_set::IndexSet;
pub use monomial::ExponentTuple;
pub use norm::{norm, TruncationNorm};
pub use ordering::Ordering;
pub use truncation::{TruncationSpec, TruncationSpecBuilder};
