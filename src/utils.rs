//! Utilities for implementers of the collections and algorithms.

mod arith;
mod error;
mod word;

pub use arith::isqrt;
pub use error::{AllocError, OutOfRange, PrimeError};
pub use word::{BitWord, IndexInWord, IndexOfWord};
