//! Containers the nth prime algorithms are built upon.

//  Design considerations
//
//  #   Why not `Vec<bool>`?
//
//  A `bool` occupies a byte, whereas the sieve only needs a bit per candidate: for n in the millions, the bound is in the
//  tens of millions, and an 8x reduction in memory is the difference between fitting in cache, or not.
//
//  #   Why `Vec`?
//
//  The growth policy of `PackedBitSet` -- doubling plus one, zero-extended -- only needs an owned buffer with fallible
//  reservation, which `Vec::try_reserve_exact` offers without any `unsafe`.

pub mod packed_bit_set;
pub mod prime_list;

pub use packed_bit_set::PackedBitSet;
pub use prime_list::PrimeList;
