//! Incremental nth prime, by trial division against the primes found so far.

use crate::{
    api::{NthPrime, Ordinal},
    collections::PrimeList,
    utils::{PrimeError, isqrt},
};

/// Computes the nth prime incrementally, caching every prime found along the way.
///
/// A query for a prime already in the cache is served from the cache; otherwise the cache is extended, testing each odd
/// candidate past the last cached prime against the cached primes up to its square root.
///
/// The cache never shrinks: it holds all primes up to the largest queried so far, for the lifetime of the generator.
///
/// ```
/// #   use nth_prime_sieve::algorithms::PrimeGenerator;
/// let mut generator = PrimeGenerator::new();
///
/// assert_eq!(Ok(11), generator.nth_prime(5));
/// assert_eq!(Ok(5), generator.nth_prime(3));
/// assert_eq!(Ok(19), generator.nth_prime(8));
///
/// assert_eq!(&[2, 3, 5, 7, 11, 13, 17, 19], generator.primes().as_slice());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrimeGenerator {
    primes: PrimeList,
    //  Number of candidates tested by trial division.
    tested: u64,
}

impl PrimeGenerator {
    /// Creates a new generator, with an empty cache.
    pub const fn new() -> Self {
        Self {
            primes: PrimeList::new(),
            tested: 0,
        }
    }

    /// Returns the primes found so far, in increasing order.
    pub fn primes(&self) -> &PrimeList {
        &self.primes
    }

    /// Returns the number of candidates tested by trial division so far.
    ///
    /// A query served from the cache does not test any candidate.
    pub fn tested(&self) -> u64 {
        self.tested
    }

    /// Returns the nth prime, with the 1st prime being 2.
    ///
    /// Returns:
    ///
    /// -   `Err(InvalidArgument)`: if `n` is less than 1.
    /// -   `Err(Alloc)`: if the cache needed to grow, and could not.
    /// -   `Err(Overflow)`: if the nth prime exceeds the range of `u64`, or its index the range of `usize`.
    pub fn nth_prime<N>(&mut self, n: N) -> Result<u64, PrimeError>
    where
        N: TryInto<Ordinal, Error = PrimeError>,
    {
        self.search(n.try_into()?)
    }
}

impl NthPrime for PrimeGenerator {
    fn nth_prime(&mut self, n: Ordinal) -> Result<u64, PrimeError> {
        self.search(n)
    }
}

//
//  Implementation details
//

impl PrimeGenerator {
    fn search(&mut self, n: Ordinal) -> Result<u64, PrimeError> {
        let index: usize = (n.get() - 1).try_into().map_err(|_| PrimeError::Overflow)?;

        while self.primes.len() <= index {
            self.extend()?;
        }

        //  In bounds, as per the loop above.
        Ok(self.primes.as_slice()[index])
    }

    //  Pushes the next prime.
    fn extend(&mut self) -> Result<(), PrimeError> {
        let Some(last) = self.primes.last() else {
            self.primes.push(2)?;
            return Ok(());
        };

        if last == 2 {
            self.primes.push(3)?;
            return Ok(());
        }

        let mut candidate = last;

        loop {
            candidate = candidate.checked_add(2).ok_or(PrimeError::Overflow)?;

            if self.is_prime(candidate) {
                log::trace!("found prime #{} = {candidate}", self.primes.len() + 1);

                self.primes.push(candidate)?;
                return Ok(());
            }
        }
    }

    //  Returns whether the odd `candidate` is prime.
    //
    //  Requires all primes up to `sqrt(candidate)` to be cached, which they are as `candidate` is past the last prime.
    fn is_prime(&mut self, candidate: u64) -> bool {
        debug_assert!(candidate % 2 == 1);

        self.tested += 1;

        let root = isqrt(candidate);

        self.primes
            .iter()
            .skip(1)
            .take_while(|p| **p <= root)
            .all(|p| candidate % p != 0)
    }
}

// mod tests
