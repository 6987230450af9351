//  Errors.

use core::{error, fmt};

/// The storage of a collection could not be obtained, or grown.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AllocError;

impl fmt::Display for AllocError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("memory allocation failed")
    }
}

impl error::Error for AllocError {}

/// An access beyond the logical length of a collection.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OutOfRange {
    /// The offending index.
    pub index: u64,
    /// The length of the collection, at the time of the access.
    pub len: u64,
}

impl fmt::Display for OutOfRange {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl error::Error for OutOfRange {}

/// An error in computing the nth prime.
///
/// No strategy ever returns a sentinel value, such as 0, in lieu of a prime: all failures are reported as one of these
/// variants.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PrimeError {
    /// The ordinal is not strictly positive.
    InvalidArgument,
    /// The sieve over `[0, bound)` does not contain `n` primes, even after retrying with larger bounds.
    EstimateTooSmall {
        /// The requested ordinal.
        n: u64,
        /// The last, and largest, bound attempted.
        bound: u64,
    },
    /// The storage of the sieve, or of the prime cache, could not be obtained.
    Alloc(AllocError),
    /// The computation exceeds the range of `u64`.
    Overflow,
}

impl From<AllocError> for PrimeError {
    fn from(error: AllocError) -> Self {
        Self::Alloc(error)
    }
}

impl fmt::Display for PrimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::InvalidArgument => f.write_str("the ordinal of a prime must be at least 1"),
            Self::EstimateTooSmall { n, bound } => write!(f, "fewer than {n} primes below {bound}"),
            Self::Alloc(error) => write!(f, "sieve storage: {error}"),
            Self::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl error::Error for PrimeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Alloc(error) => Some(error),
            _ => None,
        }
    }
}

// mod tests
