//! Nth prime strategies.
//!
//! -   `SieveEngine`: a bounded Sieve of Eratosthenes over a `PackedBitSet`, sized by `estimate_bound`. The primary
//!     strategy; requires the "std" feature.
//! -   `PrimeGenerator`: incremental trial division against a cache of the primes found so far, for repeated queries.
//! -   `TrialDivision`: naive trial division, for reference.
//!
//! All strategies implement `api::NthPrime`.

#[cfg(feature = "std")]
pub mod estimate;
pub mod generator;
#[cfg(feature = "std")]
pub mod sieve;
pub mod trial;

#[cfg(feature = "std")]
pub use estimate::{SMALL_BOUND, estimate_bound};
pub use generator::PrimeGenerator;
#[cfg(feature = "std")]
pub use sieve::{SieveConfig, SieveEngine, nth_prime};
pub use trial::{TrialDivision, is_prime};
