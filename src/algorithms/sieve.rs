//! Nth prime by a bounded Sieve of Eratosthenes.
//!
//! #   Algorithm
//!
//! 1.  Estimate a bound on the nth prime, see `estimate_bound`.
//! 2.  Allocate a `PackedBitSet` over `[0, bound)`, a set bit marking a composite.
//! 3.  Mark every even index in one pass, word by word.
//! 4.  Scan the odd indexes from 3. Each unmarked index is the next prime: stop if it is the nth, otherwise mark its odd
//!     multiples from its square onwards, with a stride of twice the prime.
//! 5.  If the scan reaches the bound first, double the bound and start over.
//!
//! Marking starts at `p²` since the smaller multiples of `p` have a smaller prime factor, and were marked already. The
//! stride is `2p` since the even multiples of `p` are even, and were marked already.
//!
//! The scan stops as soon as the nth prime is found: the bits beyond it are never marked completely, and never read.

use crate::{
    algorithms::estimate_bound,
    api::{NthPrime, Ordinal},
    collections::PackedBitSet,
    utils::{AllocError, BitWord, PrimeError},
};

/// Returns the nth prime, with the 1st prime being 2, using the default `SieveEngine`.
///
/// Returns `PrimeError::InvalidArgument` if `n` is less than 1.
///
/// ```
/// #   use nth_prime_sieve::{nth_prime, utils::PrimeError};
/// assert_eq!(Ok(2), nth_prime(1));
/// assert_eq!(Ok(541), nth_prime(100));
///
/// assert_eq!(Err(PrimeError::InvalidArgument), nth_prime(-1));
/// ```
pub fn nth_prime<N>(n: N) -> Result<u64, PrimeError>
where
    N: TryInto<Ordinal, Error = PrimeError>,
{
    SieveEngine::new().nth_prime(n)
}

/// Configuration of a `SieveEngine`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SieveConfig {
    max_retries: u32,
}

impl SieveConfig {
    /// Default number of retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 4;

    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    /// Returns the maximum number of retries, with a doubled bound, after the initial attempt.
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Sets the maximum number of retries, with a doubled bound, after the initial attempt.
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the nth prime with a bounded Sieve of Eratosthenes.
///
/// The engine holds no state beyond its configuration: each query allocates its own sieve, and releases it before
/// returning, hence the engine may be shared freely.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SieveEngine {
    config: SieveConfig,
}

//
//  Creation
//

impl SieveEngine {
    /// Creates an engine with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(SieveConfig::new())
    }

    /// Creates an engine with the given configuration.
    pub const fn with_config(config: SieveConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &SieveConfig {
        &self.config
    }
}

//
//  NthPrime (inherent)
//

impl SieveEngine {
    /// Returns the nth prime, with the 1st prime being 2.
    ///
    /// Returns:
    ///
    /// -   `Err(InvalidArgument)`: if `n` is less than 1.
    /// -   `Err(EstimateTooSmall)`: if the sieve still holds fewer than `n` primes after all retries.
    /// -   `Err(Alloc)`: if the sieve could not be allocated.
    /// -   `Err(Overflow)`: if the bound exceeds the range of `u64`.
    pub fn nth_prime<N>(&self, n: N) -> Result<u64, PrimeError>
    where
        N: TryInto<Ordinal, Error = PrimeError>,
    {
        let n = n.try_into()?.get();

        let bound = estimate_bound(n)?;

        self.search(n, bound, self.config.max_retries)
    }

    /// Returns the nth prime, if it is strictly less than `bound`.
    ///
    /// Unlike `nth_prime`, makes a single attempt, and returns `Err(EstimateTooSmall)` if there are fewer than `n`
    /// primes below `bound`.
    ///
    /// ```
    /// #   use nth_prime_sieve::{algorithms::SieveEngine, utils::PrimeError};
    /// let engine = SieveEngine::new();
    ///
    /// assert_eq!(Ok(13), engine.nth_prime_within(6, 14));
    /// assert_eq!(Err(PrimeError::EstimateTooSmall { n: 6, bound: 13 }), engine.nth_prime_within(6, 13));
    /// ```
    pub fn nth_prime_within<N>(&self, n: N, bound: u64) -> Result<u64, PrimeError>
    where
        N: TryInto<Ordinal, Error = PrimeError>,
    {
        let n = n.try_into()?.get();

        self.search(n, bound, 0)
    }
}

//
//  NthPrime (trait)
//

impl NthPrime for SieveEngine {
    fn nth_prime(&mut self, n: Ordinal) -> Result<u64, PrimeError> {
        let n = n.get();

        let bound = estimate_bound(n)?;

        self.search(n, bound, self.config.max_retries)
    }
}

//
//  Implementation details
//

impl SieveEngine {
    //  Searches for the nth prime below `bound`, doubling `bound` up to `retries` times.
    fn search(&self, n: u64, mut bound: u64, mut retries: u32) -> Result<u64, PrimeError> {
        debug_assert!(n >= 1);

        loop {
            let outcome = if n <= 2 {
                //  2 and 3 fall outside of the odd-only scan, which counts 2 up-front and starts at 3.
                Self::base_case(n, bound)
            } else {
                SieveRun::new(n, bound)?.run()
            };

            if let Outcome::Found(prime) = outcome {
                return Ok(prime);
            }

            if retries == 0 {
                return Err(PrimeError::EstimateTooSmall { n, bound });
            }

            let next = bound.checked_mul(2).ok_or(PrimeError::Overflow)?;

            log::debug!("fewer than {n} primes below {bound}, retrying below {next}");

            bound = next;
            retries -= 1;
        }
    }

    fn base_case(n: u64, bound: u64) -> Outcome {
        let prime = n + 1;

        if prime < bound {
            Outcome::Found(prime)
        } else {
            Outcome::Exhausted
        }
    }
}

//  Outcome of a single attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    //  The nth prime.
    Found(u64),
    //  There are fewer than n primes below the bound.
    Exhausted,
}

//  A single attempt at finding the nth prime below a given bound.
struct SieveRun {
    n: u64,
    bound: u64,
    //  Invariant: `composites.len() == bound`.
    composites: PackedBitSet,
}

impl SieveRun {
    fn new(n: u64, bound: u64) -> Result<Self, AllocError> {
        log::trace!("sieving for prime #{n} below {bound}");

        let mut composites = PackedBitSet::with_len(bound)?;

        //  Marks 0 and 2 as well, neither of which is ever scanned.
        composites.fill_words(BitWord::EVEN_BITS);

        Ok(Self { n, bound, composites })
    }

    fn run(mut self) -> Outcome {
        debug_assert!(self.n >= 3);

        //  2 is the 1st prime.
        let mut count = 1;

        let mut candidate = 3;

        while candidate < self.bound {
            //  Safety:
            //  -   `candidate < self.bound`, which is `self.composites.len()`, as per Invariant.
            let composite = unsafe { self.composites.get_unchecked(candidate) };

            if !composite {
                count += 1;

                if count == self.n {
                    return Outcome::Found(candidate);
                }

                self.mark_multiples(candidate);
            }

            candidate += 2;
        }

        Outcome::Exhausted
    }

    //  Marks the odd multiples of `prime`, from `prime²` onwards.
    fn mark_multiples(&mut self, prime: u64) {
        //  An overflowing square is necessarily beyond the bound.
        let Some(mut multiple) = prime.checked_mul(prime) else {
            return;
        };

        //  Cannot overflow, as `prime` is less than 2^32 for its square not to overflow.
        let stride = 2 * prime;

        while multiple < self.bound {
            //  Safety:
            //  -   `multiple < self.bound`, which is `self.composites.len()`, as per Invariant.
            unsafe { self.composites.set_unchecked(multiple) };

            let Some(next) = multiple.checked_add(stride) else {
                break;
            };

            multiple = next;
        }
    }
}

// mod tests
