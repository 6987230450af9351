//! Growable set of bits, packed in words.

use alloc::vec::Vec;

use crate::utils::{AllocError, BitWord, IndexInWord, IndexOfWord, OutOfRange};

/// A growable, bit-indexed, array of booleans.
///
/// Each index in `[0, len)` is associated to a single bit, packed 64 to a `BitWord`, all initially unset.
///
/// #   Growth
///
/// `set` and `clear` grow the set when addressing an index at or beyond `len`: the length is repeatedly doubled, plus
/// one, until the index fits. The added bits are unset. `get` and `toggle`, on the other hand, never grow the set, and
/// fail with `OutOfRange` instead.
///
/// ```
/// #   use nth_prime_sieve::collections::PackedBitSet;
/// let mut set = PackedBitSet::with_len(12).expect("allocation");
///
/// assert_eq!(Ok(true), set.set(3));
/// assert_eq!(Ok(true), set.get(3));
///
/// //  At the boundary: grows to 12 * 2 + 1.
/// assert_eq!(Ok(true), set.set(12));
/// assert_eq!(25, set.len());
///
/// assert!(set.toggle(25).is_err());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_impl::RawPackedBitSet"))]
pub struct PackedBitSet {
    //  Invariants:
    //  -   Sized: `words.len()` is `BitWord::words_for(len)`.
    //  -   Clean: all bits at or beyond `len`, up to the end of the last word, are unset.
    len: u64,
    words: Vec<BitWord>,
}

//
//  Creation
//

impl PackedBitSet {
    /// Creates a new, empty, set.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self {
            len: 0,
            words: Vec::new(),
        }
    }

    /// Creates a new set of `len` bits, all unset.
    ///
    /// Returns an error if the storage cannot be allocated.
    pub fn with_len(len: u64) -> Result<Self, AllocError> {
        let mut words = Vec::new();

        Self::extend_zeroed(&mut words, len)?;

        Ok(Self { len, words })
    }
}

//
//  Queries
//

impl PackedBitSet {
    /// Returns the number of addressable bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns whether the set has no addressable bit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying words.
    ///
    /// The bits of the last word at, or beyond, `self.len()` are always unset.
    #[inline]
    pub fn words(&self) -> &[BitWord] {
        &self.words
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(BitWord::count).sum()
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// Returns an error if `index` is not strictly less than `self.len()`.
    #[inline]
    pub fn get(&self, index: u64) -> Result<bool, OutOfRange> {
        let (of_word, in_word) = self.locate(index)?;

        Ok(self.words[of_word.0].is_set(in_word))
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// #   Safety
    ///
    /// `index` must be strictly less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: u64) -> bool {
        debug_assert!(index < self.len, "{index} >= {}", self.len);

        let (of_word, in_word) = Self::split_unchecked(index);

        //  Safety:
        //  -   `of_word.0` is in-bounds, as `index < self.len` as per pre-condition, and there are
        //      `words_for(self.len)` words, as per Sized Invariant.
        let word = unsafe { self.words.get_unchecked(of_word.0) };

        word.is_set(in_word)
    }
}

//
//  Modifications
//

impl PackedBitSet {
    /// Sets the bit at `index`, growing the set if necessary.
    ///
    /// Returns whether the bit is newly set, or not, or an error if the set needed to grow, and could not.
    #[inline]
    pub fn set(&mut self, index: u64) -> Result<bool, AllocError> {
        if index >= self.len {
            self.grow_to_fit(index)?;
        }

        let (_, in_word) = Self::split_unchecked(index);

        //  Safety:
        //  -   `index < self.len`, either initially or as per post-condition of `grow_to_fit`.
        let word = unsafe { self.word_unchecked_mut(index) };

        Ok(word.set(in_word))
    }

    /// Clears the bit at `index`, growing the set if necessary.
    ///
    /// Returns whether the bit was set, or not, or an error if the set needed to grow, and could not.
    #[inline]
    pub fn clear(&mut self, index: u64) -> Result<bool, AllocError> {
        if index >= self.len {
            self.grow_to_fit(index)?;
        }

        let (_, in_word) = Self::split_unchecked(index);

        //  Safety:
        //  -   `index < self.len`, either initially or as per post-condition of `grow_to_fit`.
        let word = unsafe { self.word_unchecked_mut(index) };

        Ok(word.reset(in_word))
    }

    /// Flips the bit at `index`, returning its new value.
    ///
    /// Returns an error if `index` is not strictly less than `self.len()`; the set never grows.
    #[inline]
    pub fn toggle(&mut self, index: u64) -> Result<bool, OutOfRange> {
        let (of_word, in_word) = self.locate(index)?;

        Ok(self.words[of_word.0].toggle(in_word))
    }

    /// Sets the bit at `index`.
    ///
    /// #   Safety
    ///
    /// `index` must be strictly less than `self.len()`.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: u64) {
        debug_assert!(index < self.len, "{index} >= {}", self.len);

        let (_, in_word) = Self::split_unchecked(index);

        //  Safety:
        //  -   `index < self.len`, as per pre-condition.
        let word = unsafe { self.word_unchecked_mut(index) };

        word.set(in_word);
    }

    /// Overwrites every word with `pattern`.
    ///
    /// Bits at or beyond `self.len()` are left unset, regardless of `pattern`.
    ///
    /// ```
    /// #   use nth_prime_sieve::{collections::PackedBitSet, utils::BitWord};
    /// let mut set = PackedBitSet::with_len(7).expect("allocation");
    ///
    /// set.fill_words(BitWord::EVEN_BITS);
    ///
    /// assert_eq!(4, set.count_ones());
    /// assert_eq!(Ok(true), set.get(6));
    /// assert_eq!(Ok(false), set.get(5));
    /// ```
    pub fn fill_words(&mut self, pattern: BitWord) {
        self.words.fill(pattern);

        self.clean_tail();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty() {
        let set = PackedBitSet::new();

        assert!(set.is_empty());
        assert_eq!(0, set.len());
        assert_eq!(0, set.words().len());
        assert_eq!(Err(OutOfRange { index: 0, len: 0 }), set.get(0));
    }

    #[test]
    fn with_len_zeroed() {
        for len in [0, 1, 12, 63, 64, 65, 1_000] {
            let set = PackedBitSet::with_len(len).expect("allocation");

            assert_eq!(len, set.len(), "{len}");
            assert_eq!(BitWord::words_for(len), Some(set.words().len()), "{len}");
            assert_eq!(0, set.count_ones(), "{len}");

            for i in 0..len {
                assert_eq!(Ok(false), set.get(i), "{len}: {i}");
            }

            assert_eq!(Err(OutOfRange { index: len, len }), set.get(len), "{len}");
        }
    }

    #[test]
    fn set_clear_toggle() {
        let mut set = PackedBitSet::with_len(130).expect("allocation");

        assert_eq!(Ok(true), set.set(129));
        assert_eq!(Ok(false), set.set(129));
        assert_eq!(Ok(true), set.get(129));
        assert_eq!(Ok(false), set.get(128));

        assert_eq!(Ok(true), set.clear(129));
        assert_eq!(Ok(false), set.clear(129));
        assert_eq!(Ok(false), set.get(129));

        assert_eq!(Ok(true), set.toggle(64));
        assert_eq!(Ok(true), set.get(64));
        assert_eq!(Ok(false), set.toggle(64));
        assert_eq!(Ok(false), set.get(64));

        assert_eq!(130, set.len());
    }

    #[test]
    fn toggle_out_of_range() {
        let mut set = PackedBitSet::with_len(12).expect("allocation");

        assert_eq!(Err(OutOfRange { index: 12, len: 12 }), set.toggle(12));
        assert_eq!(12, set.len());
    }

    #[test]
    fn split_brush() {
        for (index, of_word, in_word) in [(0, 0, 0), (1, 0, 1), (63, 0, 63), (64, 1, 0), (127, 1, 63), (133, 2, 5)] {
            let (o, i) = PackedBitSet::split_unchecked(index);

            assert_eq!((of_word, in_word), (o.0, i.0), "{index}");
        }
    }

    #[test]
    fn unchecked() {
        let mut set = PackedBitSet::with_len(200).expect("allocation");

        //  Safety:
        //  -   All indexes are strictly less than 200.
        unsafe {
            set.set_unchecked(0);
            set.set_unchecked(199);

            assert!(set.get_unchecked(0));
            assert!(!set.get_unchecked(1));
            assert!(set.get_unchecked(199));
        }

        assert_eq!(2, set.count_ones());
    }

    #[test]
    fn grow_at_boundary() {
        let mut set = PackedBitSet::with_len(12).expect("allocation");

        assert_eq!(Ok(true), set.set(11));
        assert_eq!(Ok(true), set.set(12));

        assert_eq!(25, set.len());
        assert_eq!(Ok(true), set.get(11));
        assert_eq!(Ok(true), set.get(12));

        for i in (0..11).chain(13..25) {
            assert_eq!(Ok(false), set.get(i), "{i}");
        }
    }

    #[test]
    fn grow_beyond_boundary() {
        let mut set = PackedBitSet::new();

        //  0 -> 1 -> 3 -> 7 -> 15 -> 31 -> 63 -> 127.
        assert_eq!(Ok(true), set.set(100));
        assert_eq!(127, set.len());
        assert_eq!(1, set.count_ones());

        //  Clear grows too, even though the bit is already unset.
        assert_eq!(Ok(false), set.clear(127));
        assert_eq!(255, set.len());
        assert_eq!(Ok(true), set.get(100));
    }

    #[test]
    fn grow_impossible() {
        let mut set = PackedBitSet::new();

        assert_eq!(Err(AllocError), set.set(u64::MAX));
        assert!(set.is_empty());
    }

    #[test]
    fn fill_words_clean_tail() {
        let mut set = PackedBitSet::with_len(70).expect("allocation");

        set.fill_words(BitWord::ALL_ONES);

        assert_eq!(70, set.count_ones());
        assert_eq!(BitWord::mask_before(IndexInWord(6)), set.words()[1]);

        set.fill_words(BitWord::EVEN_BITS);

        assert_eq!(35, set.count_ones());

        for i in 0..70 {
            assert_eq!(Ok(i % 2 == 0), set.get(i), "{i}");
        }
    }

    #[test]
    fn grow_after_fill_is_clean() {
        let mut set = PackedBitSet::with_len(70).expect("allocation");

        set.fill_words(BitWord::ALL_ONES);

        assert_eq!(Ok(true), set.set(70));
        assert_eq!(141, set.len());
        assert_eq!(71, set.count_ones());
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Set(u64),
        Clear(u64),
        Toggle(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..300).prop_map(Op::Set),
            (0u64..300).prop_map(Op::Clear),
            (0u64..300).prop_map(Op::Toggle),
        ]
    }

    proptest! {
        #[test]
        fn matches_model(initial in 0u64..100, ops in proptest::collection::vec(op(), 0..200)) {
            let mut set = PackedBitSet::with_len(initial).expect("allocation");
            let mut model = HashSet::new();

            for op in ops {
                let len = set.len();

                match op {
                    Op::Set(i) => {
                        prop_assert_eq!(Ok(model.insert(i)), set.set(i));
                        prop_assert!(i < set.len());
                    }
                    Op::Clear(i) => {
                        prop_assert_eq!(Ok(model.remove(&i)), set.clear(i));
                        prop_assert!(i < set.len());
                    }
                    Op::Toggle(i) if i < len => {
                        let now = !model.remove(&i);

                        if now {
                            model.insert(i);
                        }

                        prop_assert_eq!(Ok(now), set.toggle(i));
                    }
                    Op::Toggle(i) => {
                        prop_assert_eq!(Err(OutOfRange { index: i, len }), set.toggle(i));
                        prop_assert_eq!(len, set.len());
                    }
                }
            }

            for i in 0..set.len() {
                prop_assert_eq!(Ok(model.contains(&i)), set.get(i));
            }

            prop_assert_eq!(model.len() as u64, set.count_ones());
        }
    }
} // mod tests

//
//  Implementation details
//

impl PackedBitSet {
    //  Splits `index` into a word/bit pair, if in range.
    #[inline]
    fn locate(&self, index: u64) -> Result<(IndexOfWord, IndexInWord), OutOfRange> {
        let len = self.len;

        if index >= len {
            return Err(OutOfRange { index, len });
        }

        Ok(Self::split_unchecked(index))
    }

    //  Splits `index` into a word/bit pair.
    //
    //  The index-of-word is only guaranteed to fit in a `usize` if `index` is strictly less than `self.len`, as per
    //  Sized Invariant.
    #[inline]
    const fn split_unchecked(index: u64) -> (IndexOfWord, IndexInWord) {
        let of_word = index / BitWord::BITS;
        let in_word = index % BitWord::BITS;

        (IndexOfWord(of_word as _), IndexInWord(in_word as _))
    }

    //  #   Safety
    //
    //  -   `index` must be strictly less than `self.len`.
    #[inline]
    unsafe fn word_unchecked_mut(&mut self, index: u64) -> &mut BitWord {
        let (of_word, _) = Self::split_unchecked(index);

        debug_assert!(of_word.0 < self.words.len(), "{} >= {}", of_word.0, self.words.len());

        //  Safety:
        //  -   `of_word.0` is in-bounds, as `index < self.len` as per pre-condition, and there are
        //      `words_for(self.len)` words, as per Sized Invariant.
        unsafe { self.words.get_unchecked_mut(of_word.0) }
    }

    //  Grows `self.len`, doubling it plus one at a time, until `index < self.len`.
    //
    //  On error, `self` is left unchanged.
    #[inline(never)]
    fn grow_to_fit(&mut self, index: u64) -> Result<(), AllocError> {
        debug_assert!(index >= self.len, "spurious");

        //  `len` cannot exceed `u64::MAX`, hence neither can any index.
        if index == u64::MAX {
            return Err(AllocError);
        }

        let mut len = self.len;

        while len <= index {
            len = len.saturating_mul(2).saturating_add(1);
        }

        log::trace!("growing bit set from {} to {len} bits to fit {index}", self.len);

        Self::extend_zeroed(&mut self.words, len)?;

        //  Clean Invariant: the former tail bits were unset, and the new words are zeroed.
        self.len = len;

        Ok(())
    }

    //  Extends `words` with zeroed words until it holds `len` bits.
    //
    //  On error, `words` is left unchanged.
    fn extend_zeroed(words: &mut Vec<BitWord>, len: u64) -> Result<(), AllocError> {
        let target = BitWord::words_for(len).ok_or(AllocError)?;

        debug_assert!(target >= words.len());

        let additional = target - words.len();

        words.try_reserve_exact(additional).map_err(|_| AllocError)?;
        words.resize(target, BitWord::ALL_ZEROS);

        Ok(())
    }

    //  Restores the Clean Invariant after a bulk write.
    fn clean_tail(&mut self) {
        let (_, in_word) = Self::split_unchecked(self.len);

        if in_word.0 == 0 {
            return;
        }

        if let Some(last) = self.words.last_mut() {
            *last &= BitWord::mask_before(in_word);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    //  Unchecked representation, validated into a `PackedBitSet`.
    #[derive(serde::Deserialize)]
    pub(super) struct RawPackedBitSet {
        len: u64,
        words: Vec<BitWord>,
    }

    impl TryFrom<RawPackedBitSet> for PackedBitSet {
        type Error = &'static str;

        fn try_from(raw: RawPackedBitSet) -> Result<Self, Self::Error> {
            let RawPackedBitSet { len, words } = raw;

            if BitWord::words_for(len) != Some(words.len()) {
                return Err("number of words does not match the number of bits");
            }

            let mut set = Self { len, words };

            let tail = set.words.last().copied();

            set.clean_tail();

            if tail != set.words.last().copied() {
                return Err("bits set beyond the number of bits");
            }

            Ok(set)
        }
    }
} // mod serde_impl

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let mut set = PackedBitSet::with_len(70).expect("allocation");

        set.set(3).expect("in range");
        set.set(69).expect("in range");

        let json = serde_json::to_string(&set).expect("serializable");

        assert_eq!(r#"{"len":70,"words":[8,32]}"#, json);

        let back: PackedBitSet = serde_json::from_str(&json).expect("deserializable");

        assert_eq!(set, back);
    }

    #[test]
    fn full_last_word() {
        let json = format!(r#"{{"len":64,"words":[{}]}}"#, u64::MAX);

        let set: PackedBitSet = serde_json::from_str(&json).expect("deserializable");

        assert_eq!(64, set.count_ones());
    }

    #[test]
    fn reject_words_mismatch() {
        for json in [r#"{"len":70,"words":[0]}"#, r#"{"len":70,"words":[0,0,0]}"#, r#"{"len":0,"words":[0]}"#] {
            let error = serde_json::from_str::<PackedBitSet>(json).expect_err("mismatch");

            assert!(error.to_string().contains("number of words"), "{json}: {error}");
        }
    }

    #[test]
    fn reject_dirty_tail() {
        //  Bit 6 of the 2nd word is index 70, beyond the length.
        let json = r#"{"len":70,"words":[0,64]}"#;

        let error = serde_json::from_str::<PackedBitSet>(json).expect_err("dirty tail");

        assert!(error.to_string().contains("beyond the number of bits"), "{error}");
    }
} // mod serde_tests
