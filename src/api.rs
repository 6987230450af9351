//! A set of vocabulary types and traits shared by the nth prime strategies.

pub mod nth_prime;
pub mod ordinal;

pub use nth_prime::NthPrime;
pub use ordinal::Ordinal;

pub use crate::utils::PrimeError;
