//! Big Digits \
//! This crate provides:
//! - [`BigUint`]: Immutable arbitrary-precision non-negative integers kept as decimal digits,
//!   with schoolbook addition, subtraction and multiplication, doubling division and factorial.
//! - [`Error`]: the ways the partial operations (parsing, subtraction, division) can fail.

mod big_uint;
mod big_uint_cache;
mod big_uint_constants;
mod error;

pub use big_uint::BigUint;
pub use error::{Error, Result};
