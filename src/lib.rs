//! Nth prime computation over a growable packed bit sieve.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `algorithms` module contains the nth prime strategies built atop this API: the sieve engine, the incremental
//!     generator, and trial division.
//! -   The `collections` module contains the containers these strategies are built upon.
//! -   The `utils` module contains a selection of low-level types upon which the containers, and algorithms, are
//!     built.
//!
//!
//! #   Ordinals
//!
//! Primes are numbered from 1: the 1st prime is 2, the 2nd is 3, the 6th is 13. An ordinal of 0, or a negative
//! ordinal, is an error rather than a degenerate input, see `api::Ordinal`.
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use nth_prime_sieve::nth_prime;
//!
//! assert_eq!(Ok(2), nth_prime(1));
//! assert_eq!(Ok(13), nth_prime(6));
//! assert_eq!(Ok(7_919), nth_prime(1_000));
//!
//! assert!(nth_prime(0).is_err());
//! # }
//! ```
//!
//!
//! #   Why `u64`?
//!
//! Primes and bit indexes are expressed as `u64`, rather than `usize`: `usize` is only sufficient to index every _byte_
//! of a program, not every _bit_. On a 32-bits platform, a sieve over 2^33 bits occupies a mere 1 GB.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod algorithms;
pub mod api;
pub mod collections;
pub mod utils;

#[cfg(feature = "std")]
pub use algorithms::{estimate_bound, nth_prime};
