//! Upper bound on the nth prime.

use crate::utils::PrimeError;

/// Bound for `n < 6`: one more than 11, the 5th prime.
pub const SMALL_BOUND: u64 = 12;

/// Returns an exclusive upper bound on the nth prime, suitable to size a sieve.
///
/// -   For `n < 6`, returns `SMALL_BOUND`.
/// -   For `n >= 6`, returns `ceil(n * (ln n + ln ln n))`, a known upper bound on the nth prime from `n = 6` onwards.
///
/// The bound is non-decreasing in `n`. It is computed in floating point, hence the sieve engine still checks that the
/// sieve holds `n` primes, rather than trusting the bound blindly.
///
/// Returns `PrimeError::Overflow` if the bound exceeds the range of `u64`.
///
/// ```
/// #   use nth_prime_sieve::estimate_bound;
/// assert_eq!(Ok(12), estimate_bound(5));
/// assert_eq!(Ok(15), estimate_bound(6));
/// assert_eq!(Ok(8_841), estimate_bound(1_000));
/// ```
pub fn estimate_bound(n: u64) -> Result<u64, PrimeError> {
    if n < 6 {
        return Ok(SMALL_BOUND);
    }

    let n = n as f64;
    let ln = n.ln();

    let estimate = (n * (ln + ln.ln())).ceil();

    //  `u64::MAX as f64` rounds up to 2^64, hence a strict comparison.
    if estimate >= u64::MAX as f64 {
        return Err(PrimeError::Overflow);
    }

    Ok(estimate as u64)
}

// mod tests
