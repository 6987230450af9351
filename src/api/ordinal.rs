//! The position of a prime in the sequence of primes.

use core::{fmt, num::NonZeroU64};

use crate::utils::PrimeError;

/// The 1-indexed position of a prime in the sequence 2, 3, 5, 7, 11, ...
///
/// An ordinal is never 0: conversions from 0, or from a negative integer, fail with `PrimeError::InvalidArgument`.
///
/// ```
/// #   use nth_prime_sieve::{api::Ordinal, utils::PrimeError};
/// assert_eq!(6, Ordinal::try_from(6).expect("positive").get());
///
/// assert_eq!(Err(PrimeError::InvalidArgument), Ordinal::try_from(0u64));
/// assert_eq!(Err(PrimeError::InvalidArgument), Ordinal::try_from(-1i64));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ordinal(NonZeroU64);

impl Ordinal {
    /// The first ordinal, that of the prime 2.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Creates an ordinal, if `n` is not 0.
    #[inline]
    pub const fn new(n: u64) -> Option<Self> {
        //  FIXME: convert to `.map` when it is const.
        match NonZeroU64::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the ordinal, as an integer.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for Ordinal {
    fn from(n: NonZeroU64) -> Self {
        Self(n)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! ordinal_try_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Ordinal {
                type Error = PrimeError;

                #[inline]
                fn try_from(n: $t) -> Result<Self, Self::Error> {
                    let n: u64 = n.try_into().map_err(|_| PrimeError::InvalidArgument)?;

                    Self::new(n).ok_or(PrimeError::InvalidArgument)
                }
            }
        )*
    };
}

ordinal_try_from!(u8, u16, u32, usize, i8, i16, i32, i64, isize);

impl TryFrom<u64> for Ordinal {
    type Error = PrimeError;

    #[inline]
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(PrimeError::InvalidArgument)
    }
}

// mod tests
