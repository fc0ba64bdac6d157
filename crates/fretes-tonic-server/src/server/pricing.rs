//! Price sampling for shipping quotes.
//!
//! The handler never talks to an RNG directly; it draws from a
//! [`PriceSource`] chosen at construction time. Production uses
//! [`ThreadRandom`]; tests inject deterministic sources.

use fretes_tonic_core::types::VALOR_LIMIT;
use rand::Rng;

/// A source of quoted prices.
pub trait PriceSource {
    /// Returns a price in `[0.0, VALOR_LIMIT)`.
    fn sample(&self) -> f64;
}

/// A `PriceSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
#[derive(Default, Clone)]
pub struct ThreadRandom;

impl PriceSource for ThreadRandom {
    fn sample(&self) -> f64 {
        rand::rng().random_range(0.0..VALOR_LIMIT)
    }
}
