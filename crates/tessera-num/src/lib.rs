//! Exact arbitrary-precision arithmetic for expression evaluation and
//! puzzle solving.
//!
//! The crate provides three layers:
//!
//! - [`Integer`], a thin wrapper around [`dashu::integer::IBig`] with
//!   Python-style floored division and modulo,
//! - [`Rational`], a reduced fraction built on [`dashu::rational::RBig`],
//! - [`Number`], the runtime value of an evaluated expression, which is
//!   either an [`Integer`] or a [`Rational`] and knows which operations
//!   are meaningful for each variant.
//!
//! All arithmetic is exact. There is no floating point anywhere in this
//! workspace, so `1 / 3` is the fraction `1/3` and comparing a computed
//! value against a target never needs an epsilon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod number;
pub mod rational;

pub use integer::Integer;
pub use number::{Number, NumError, MAX_EXPONENT, MAX_SHIFT};
pub use rational::Rational;

#[cfg(test)]
mod proptests;
