//! Ordered, growable, list of primes.

use alloc::vec::Vec;
use core::slice;

use crate::utils::{AllocError, OutOfRange};

/// An ordered, growable, list of integers.
///
/// Used by `PrimeGenerator` as its cache: the primes are pushed in increasing order, and never removed.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u64>", into = "Vec<u64>"))]
pub struct PrimeList(Vec<u64>);

impl PrimeList {
    /// Creates a new, empty, list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a new list holding `values`, in order.
    pub fn from_slice(values: &[u64]) -> Result<Self, AllocError> {
        let mut list = Vec::new();

        list.try_reserve_exact(values.len()).map_err(|_| AllocError)?;
        list.extend_from_slice(values);

        Ok(Self(list))
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `index`.
    ///
    /// Returns an error if `index` is not strictly less than `self.len()`.
    ///
    /// ```
    /// #   use nth_prime_sieve::collections::PrimeList;
    /// let list = PrimeList::from_slice(&[2, 3, 5]).expect("allocation");
    ///
    /// assert_eq!(Ok(5), list.at(2));
    /// assert!(list.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<u64, OutOfRange> {
        self.0.get(index).copied().ok_or(OutOfRange {
            index: index as u64,
            len: self.0.len() as u64,
        })
    }

    /// Returns the last value, if any.
    #[inline]
    pub fn last(&self) -> Option<u64> {
        self.0.last().copied()
    }

    /// Appends a value.
    ///
    /// Returns an error if the list needed to grow, and could not.
    #[inline]
    pub fn push(&mut self, value: u64) -> Result<(), AllocError> {
        debug_assert!(self.last().is_none_or(|last| last < value), "{value} out of order");

        self.0.try_reserve(1).map_err(|_| AllocError)?;
        self.0.push(value);

        Ok(())
    }

    /// Returns the values, in order.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Returns an iterator over the values, in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, u64> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a u64;
    type IntoIter = slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// mod tests

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    impl TryFrom<Vec<u64>> for PrimeList {
        type Error = &'static str;

        fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
            if values.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err("values not in strictly increasing order");
            }

            Ok(Self(values))
        }
    }

    impl From<PrimeList> for Vec<u64> {
        fn from(list: PrimeList) -> Self {
            list.0
        }
    }
} // mod serde_impl

// mod serde_tests
