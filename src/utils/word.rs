//  See `BitWord` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them.
//
//  A dedicated type, on top of avoiding confusion between a word of bits and a prime, is more ergonomic as inherent
//  methods can just be called without any hassle.
//
//
//  #   Why `u64`?
//
//  A single word width is used throughout: get, set, clear, toggle, and fill all split an index the same way. Mixing
//  widths -- dividing by 8 in one operation and by 32 in another -- silently addresses the wrong bit.
//
//  Since 32-bits & 64-bits CPUs tend to support `u64` natively, it is the largest well supported type, and makes bulk
//  operations, such as pre-marking every even number, 8x cheaper than with bytes.

use core::ops::BitAndAssign;

/// A word of bits.
///
/// `PackedBitSet` stores one bit per index, packed 64 to a word; `BitWord` offers the methods to manipulate the bits of
/// a single word.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct BitWord(pub u64);

/// The index of a word, in a sequence of words.
///
/// #   Why `usize`?
///
/// In Rust, all slices are indexed by a `usize`, and the `IndexOfWord` will be used nigh exclusively as an index in
/// slices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWord(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 64. No index created by `PackedBitSet` will
/// ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWord` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWord(pub u32);

//
//  Constants.
//

impl BitWord {
    /// Number of bits in a word.
    pub const BITS: u64 = 64;

    /// An all-zeros word.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones word.
    pub const ALL_ONES: Self = Self(!0);

    /// A word with every even bit set, and every odd bit unset.
    ///
    /// Since `BitWord::BITS` is even, filling consecutive words with this pattern sets exactly the bits of even
    /// indexes.
    pub const EVEN_BITS: Self = Self(0x5555_5555_5555_5555);
}

//
//  Static operations.
//

impl BitWord {
    /// Returns the number of words required to hold `len` bits, that is `ceil(len / 64)`.
    ///
    /// Returns None if the number of words does not fit in a `usize`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::BitWord;
    /// assert_eq!(Some(0), BitWord::words_for(0));
    /// assert_eq!(Some(1), BitWord::words_for(1));
    /// assert_eq!(Some(1), BitWord::words_for(64));
    /// assert_eq!(Some(2), BitWord::words_for(65));
    /// ```
    #[inline]
    pub const fn words_for(len: u64) -> Option<usize> {
        let words = len / Self::BITS + (len % Self::BITS != 0) as u64;

        if words as usize as u64 != words {
            return None;
        }

        Some(words as _)
    }
}

// mod static_tests

//
//  Bit operations.
//

impl BitWord {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::BitWord;
    /// assert_eq!(0, BitWord::ALL_ZEROS.count());
    /// assert_eq!(32, BitWord::EVEN_BITS.count());
    /// assert_eq!(64, BitWord::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> u64 {
        self.0.count_ones() as _
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::{BitWord, IndexInWord};
    /// let word = BitWord(0b1001);
    ///
    /// assert!(word.is_set(IndexInWord(0)));
    /// assert!(word.is_set(IndexInWord(3)));
    ///
    /// for i in (1..=2).chain(4..=63) {
    ///     assert!(!word.is_set(IndexInWord(i)));
    /// }
    /// ```
    #[inline]
    pub const fn is_set(&self, bit: IndexInWord) -> bool {
        (self.0 >> Self::shift(bit)) & 1 == 1
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(!word.set(IndexInWord(0)));
    /// assert!(word.set(IndexInWord(2)));
    ///
    /// assert_eq!(0b1101, word.0);
    /// ```
    #[inline]
    pub const fn set(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(word.reset(IndexInWord(0)));
    /// assert!(!word.reset(IndexInWord(2)));
    ///
    /// assert_eq!(0b1000, word.0);
    /// ```
    #[inline]
    pub const fn reset(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }

    /// Flips a bit.
    ///
    /// Returns the new value of the bit.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(!word.toggle(IndexInWord(0)));
    /// assert!(word.toggle(IndexInWord(1)));
    ///
    /// assert_eq!(0b1010, word.0);
    /// ```
    #[inline]
    pub const fn toggle(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        self.0 ^= mask;

        (self.0 & mask) != 0
    }

    /// Returns a word with all the bits strictly before `bit` set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use nth_prime_sieve::utils::{BitWord, IndexInWord};
    /// assert_eq!(BitWord::ALL_ZEROS, BitWord::mask_before(IndexInWord(0)));
    /// assert_eq!(BitWord(0b0111), BitWord::mask_before(IndexInWord(3)));
    /// ```
    #[inline]
    pub const fn mask_before(bit: IndexInWord) -> Self {
        Self(Self::bit_mask(bit) - 1)
    }
}

#[cfg(test)]
mod bit_tests {
    use super::*;

    const BITS: u32 = BitWord::BITS as u32;

    #[test]
    fn is_set_empty() {
        for i in 0..BITS {
            assert!(!BitWord::ALL_ZEROS.is_set(IndexInWord(i)), "{i}");
        }
    }

    #[test]
    fn is_set_full() {
        for i in 0..BITS {
            assert!(BitWord::ALL_ONES.is_set(IndexInWord(i)), "{i}");
        }
    }

    #[test]
    fn is_set_even() {
        for i in 0..BITS {
            assert_eq!(i % 2 == 0, BitWord::EVEN_BITS.is_set(IndexInWord(i)), "{i}");
        }
    }

    #[test]
    fn set_reset_roundabout() {
        for i in 0..BITS {
            let mut word = BitWord::ALL_ZEROS;

            assert!(word.set(IndexInWord(i)), "{i}");
            assert!(!word.set(IndexInWord(i)), "{i}");
            assert_eq!(1, word.count(), "{i}");

            assert!(word.reset(IndexInWord(i)), "{i}");
            assert!(!word.reset(IndexInWord(i)), "{i}");
            assert_eq!(BitWord::ALL_ZEROS, word, "{i}");
        }
    }

    #[test]
    fn toggle_twice() {
        for i in 0..BITS {
            let mut word = BitWord::EVEN_BITS;

            assert_eq!(i % 2 != 0, word.toggle(IndexInWord(i)), "{i}");
            assert_eq!(i % 2 == 0, word.toggle(IndexInWord(i)), "{i}");
            assert_eq!(BitWord::EVEN_BITS, word, "{i}");
        }
    }

    #[test]
    fn mask_before_count() {
        for i in 0..BITS {
            let mask = BitWord::mask_before(IndexInWord(i));

            assert_eq!(i as u64, mask.count(), "{i}");
            assert!(!mask.is_set(IndexInWord(i)), "{i}");
        }
    }
} // mod bit_tests

//
//  Bitwise trait.
//

impl BitAndAssign for BitWord {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

//
//  Implementation details
//

impl BitWord {
    //  Shift of the bit.
    #[inline]
    const fn shift(bit: IndexInWord) -> u32 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        bit.0 % Self::BITS as u32
    }

    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWord) -> u64 {
        1 << Self::shift(bit)
    }
}
