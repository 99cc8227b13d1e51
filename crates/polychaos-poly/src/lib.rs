//! # polychaos-poly
//!
//! Polynomial representation used by polychaos expansions.
//!
//! This crate provides:
//! - The `Ring` trait for coefficients, implemented for the primitive
//!   numeric types
//! - The `Polynomial` trait: the operations expansions need from a
//!   polynomial type
//! - `SparsePoly`, a sparse multivariate polynomial keyed by exponent tuples

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sparse;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use sparse::SparsePoly;
pub use traits::{Polynomial, Ring};
