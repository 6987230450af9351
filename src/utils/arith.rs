//  Integer arithmetic helpers.

/// Integer square root: the largest `r` such that `r * r <= n`.
///
/// Overflow-safe for all `u64` values, and independent of floating point, so it is available without `std`.
///
/// #   Examples
///
/// ```
/// #   use nth_prime_sieve::utils::isqrt;
/// assert_eq!(0, isqrt(0));
/// assert_eq!(3, isqrt(15));
/// assert_eq!(4, isqrt(16));
/// assert_eq!(4_294_967_295, isqrt(u64::MAX));
/// ```
#[inline]
pub const fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    //  Seed with a power of 2 at least as large as the root, Newton's iteration then decreases monotonically.
    let shift = (u64::BITS - n.leading_zeros()).div_ceil(2);

    let mut x = 1u64 << shift;

    loop {
        let y = (x + n / x) / 2;

        if y >= x {
            break;
        }

        x = y;
    }

    //  Correct any residual error, using checked arithmetic near `u64::MAX`.
    while x > 0 && !fits(x, n) {
        x -= 1;
    }

    while fits(x + 1, n) {
        x += 1;
    }

    x
}

//  Returns whether `x * x <= n`, without overflow.
#[inline]
const fn fits(x: u64, n: u64) -> bool {
    match x.checked_mul(x) {
        Some(square) => square <= n,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_small() {
        let mut root = 0;

        for n in 0..10_000u64 {
            if (root + 1) * (root + 1) <= n {
                root += 1;
            }

            assert_eq!(root, isqrt(n), "{n}");
        }
    }

    #[test]
    fn isqrt_safety() {
        assert_eq!(0, isqrt(0));
        assert_eq!(1, isqrt(1));
        assert_eq!(2, isqrt(4));
        assert_eq!(4_294_967_295, isqrt(u64::MAX));
        assert_eq!(1 << 26, isqrt(1 << 52));
        assert_eq!((1 << 26) - 1, isqrt((1 << 52) - 1));
    }

    #[test]
    fn isqrt_squares() {
        for root in [3u64, 1_000, 65_535, 65_536, 3_037_000_499, 4_294_967_295] {
            let square = root * root;

            assert_eq!(root, isqrt(square), "{square}");
            assert_eq!(root - 1, isqrt(square - 1), "{square} - 1");
        }
    }
} // mod tests
