//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for
//! every operator in the crate. It is passed explicitly by mutable reference,
//! so a generation transition is reproducible whenever the generator is created
//! with [`RandomNumberGenerator::from_seed`].
//!
//! ## Example
//!
//! ```rust
//! use genetools::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let u = rng.uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let i = rng.index(10);
//! assert!(i < 10);
//! ```

use rand::{distributions::Distribution, rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws used
/// by the genetic operators.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniform value in `[from, to)`.
    ///
    /// When `from >= to` the lower bound itself is returned. Bounds whose
    /// width overflows are interpolated directly instead of going through
    /// `gen_range`, and a NaN or infinite bound yields a non-finite value
    /// rather than a panic.
    pub fn uniform_range(&mut self, from: f64, to: f64) -> f64 {
        if from >= to {
            return from;
        }
        if (to - from).is_finite() {
            self.rng.gen_range(from..to)
        } else {
            let u = self.uniform();
            from * (1.0 - u) + to * u
        }
    }

    /// Returns a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero. Every operator in the crate checks for an
    /// empty pool before drawing.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniform integer in `[low, high)`.
    ///
    /// # Panics
    ///
    /// Panics if `low >= high`.
    pub fn range(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }

    /// Draws one value from an arbitrary distribution.
    pub fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>,
    {
        distribution.sample(&mut self.rng)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
