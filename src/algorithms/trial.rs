//! Naive primality by trial division.

use crate::{
    api::{NthPrime, Ordinal},
    utils::{PrimeError, isqrt},
};

/// Returns whether `p` is prime, by trying every divisor in `[2, sqrt(p)]`.
///
/// ```
/// #   use nth_prime_sieve::algorithms::is_prime;
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(7_919));
/// assert!(!is_prime(7_921));
/// ```
pub fn is_prime(p: u64) -> bool {
    if p < 2 {
        return false;
    }

    (2..=isqrt(p)).all(|divisor| p % divisor != 0)
}

/// Computes the nth prime by testing every integer in turn with `is_prime`.
///
/// Quadratic, at best: meant as a reference to check other strategies against.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TrialDivision;

impl TrialDivision {
    /// Creates a new instance.
    pub const fn new() -> Self {
        Self
    }

    /// Returns the nth prime, with the 1st prime being 2.
    ///
    /// Returns `PrimeError::InvalidArgument` if `n` is less than 1.
    pub fn nth_prime<N>(&self, n: N) -> Result<u64, PrimeError>
    where
        N: TryInto<Ordinal, Error = PrimeError>,
    {
        Self::search(n.try_into()?)
    }

    fn search(n: Ordinal) -> Result<u64, PrimeError> {
        let mut remaining = n.get();
        let mut candidate = 1u64;

        loop {
            candidate = candidate.checked_add(1).ok_or(PrimeError::Overflow)?;

            if is_prime(candidate) {
                remaining -= 1;

                if remaining == 0 {
                    return Ok(candidate);
                }
            }
        }
    }
}

impl NthPrime for TrialDivision {
    fn nth_prime(&mut self, n: Ordinal) -> Result<u64, PrimeError> {
        Self::search(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_small() {
        let primes: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

        for p in 0..30 {
            assert_eq!(primes.contains(&p), is_prime(p), "{p}");
        }
    }

    #[test]
    fn is_prime_squares() {
        for p in [3u64, 5, 7, 11, 251, 65_521] {
            assert!(is_prime(p), "{p}");
            assert!(!is_prime(p * p), "{p}");
        }
    }

    #[test]
    fn is_prime_count() {
        //  There are 1229 primes below 10,000.
        assert_eq!(1_229, (0..10_000).filter(|p| is_prime(*p)).count());
    }

    #[test]
    fn nth_prime() {
        let trial = TrialDivision::new();

        assert_eq!(Ok(2), trial.nth_prime(1));
        assert_eq!(Ok(3), trial.nth_prime(2));
        assert_eq!(Ok(13), trial.nth_prime(6));
        assert_eq!(Ok(541), trial.nth_prime(100));
        assert_eq!(Ok(7_919), trial.nth_prime(1_000));

        assert_eq!(Err(PrimeError::InvalidArgument), trial.nth_prime(0));
        assert_eq!(Err(PrimeError::InvalidArgument), trial.nth_prime(-1));
    }

    #[test]
    fn nth_prime_trait() {
        let mut trial = TrialDivision::new();

        assert_eq!(Ok(2), NthPrime::nth_prime(&mut trial, Ordinal::FIRST));
        assert_eq!(Ok(29), NthPrime::nth_prime(&mut &mut trial, Ordinal::new(10).expect("positive")));
    }
} // mod tests
