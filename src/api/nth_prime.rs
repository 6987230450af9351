//! A generic nth prime strategy.

use crate::{api::Ordinal, utils::PrimeError};

/// A strategy to compute the nth prime.
///
/// Strategies may keep state across queries, such as a cache of the primes found so far, hence the `&mut self`
/// receiver. Whichever the state, a strategy must return the same prime for the same ordinal, every time.
pub trait NthPrime {
    /// Returns the nth prime, with the 1st prime being 2.
    ///
    /// Returns an error if the prime could not be computed; never returns a sentinel value in lieu of a prime.
    fn nth_prime(&mut self, n: Ordinal) -> Result<u64, PrimeError>;
}

impl<T> NthPrime for &mut T
where
    T: ?Sized + NthPrime,
{
    fn nth_prime(&mut self, n: Ordinal) -> Result<u64, PrimeError> {
        (**self).nth_prime(n)
    }
}
