//! # GaussianMutation
//!
//! Adds `perturb_size * N(mu, sigma)` to each gene with a fixed probability.
//! Values are not clamped and can drift outside any intended domain.
//!
//! ## Example
//!
//! ```rust
//! use genetools::mutation::{GaussianMutation, MutationStrategy};
//! use genetools::rng::RandomNumberGenerator;
//!
//! let mutation = GaussianMutation::new(1.0)
//!     .unwrap()
//!     .with_sigma(0.5)
//!     .unwrap();
//!
//! let mut genome = vec![0.0, 0.0, 0.0];
//! mutation.mutate(&mut genome, &mut RandomNumberGenerator::new()).unwrap();
//! assert!(genome.iter().all(|&g| g != 0.0));
//! ```
use rand_distr::Normal;

use super::{check_probability, MutationStrategy};
use crate::{
    error::{GeneticError, Result, ResultExt},
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GaussianParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianMutation {
    probability: f64,
    perturb_size: f64,
    mu: f64,
    sigma: f64,
}

/// Unchecked fields, validated through `with_params` on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GaussianParams {
    probability: f64,
    perturb_size: f64,
    mu: f64,
    sigma: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<GaussianParams> for GaussianMutation {
    type Error = GeneticError;

    fn try_from(params: GaussianParams) -> Result<Self> {
        Self::with_params(params.probability, params.perturb_size, params.mu, params.sigma)
    }
}

impl GaussianMutation {
    pub const DEFAULT_PROBABILITY: f64 = 0.01;

    /// Creates a Gaussian mutation with `perturb_size = 1`, `mu = 0` and
    /// `sigma = 0.1`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::with_params(probability, 1.0, 0.0, 0.1)
    }

    /// Creates a Gaussian mutation with every parameter given.
    ///
    /// # Errors
    ///
    /// Fails if `probability` is outside `[0, 1]`, `sigma` is negative, or any
    /// parameter is not finite.
    pub fn with_params(probability: f64, perturb_size: f64, mu: f64, sigma: f64) -> Result<Self> {
        if !perturb_size.is_finite() || !mu.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Gaussian mutation needs finite perturb size and mean, got {} and {}",
                perturb_size, mu
            )));
        }

        if !sigma.is_finite() || sigma < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Gaussian mutation needs a finite, non-negative sigma, got {}",
                sigma
            )));
        }

        Ok(Self {
            probability: check_probability(probability)?,
            perturb_size,
            mu,
            sigma,
        })
    }

    pub fn with_perturb_size(self, perturb_size: f64) -> Result<Self> {
        Self::with_params(self.probability, perturb_size, self.mu, self.sigma)
    }

    pub fn with_mu(self, mu: f64) -> Result<Self> {
        Self::with_params(self.probability, self.perturb_size, mu, self.sigma)
    }

    pub fn with_sigma(self, sigma: f64) -> Result<Self> {
        Self::with_params(self.probability, self.perturb_size, self.mu, sigma)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn perturb_size(&self) -> f64 {
        self.perturb_size
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for GaussianMutation {
    /// The built-in mutation of the evolution strategies: probability 0.01,
    /// `N(0, 0.1)` noise at full size.
    fn default() -> Self {
        Self {
            probability: Self::DEFAULT_PROBABILITY,
            perturb_size: 1.0,
            mu: 0.0,
            sigma: 0.1,
        }
    }
}

impl MutationStrategy<f64> for GaussianMutation {
    fn mutate(&self, genome: &mut [f64], rng: &mut RandomNumberGenerator) -> Result<()> {
        // Constructors and deserialization both validate sigma, so this only
        // fails if the distribution rejects a value they accept.
        let normal =
            Normal::new(self.mu, self.sigma).context("Invalid Gaussian mutation parameters")?;

        for gene in genome.iter_mut() {
            if rng.uniform() < self.probability {
                let noise: f64 = rng.sample(&normal);
                *gene += self.perturb_size * noise;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_probability_keeps_genome() {
        let mutation = GaussianMutation::new(0.0).unwrap();
        let mut genome = vec![0.25, -1.0, 3.5];
        let mut rng = RandomNumberGenerator::new();

        mutation.mutate(&mut genome, &mut rng).unwrap();

        assert_eq!(genome, vec![0.25, -1.0, 3.5]);
    }

    #[test]
    fn test_full_probability_changes_every_gene() {
        let mutation = GaussianMutation::new(1.0).unwrap();
        let original = vec![0.25, -1.0, 3.5, 0.0, 10.0];
        let mut genome = original.clone();
        let mut rng = RandomNumberGenerator::from_seed(31);

        mutation.mutate(&mut genome, &mut rng).unwrap();

        assert_eq!(genome.len(), original.len());
        for (after, before) in genome.iter().zip(&original) {
            assert_ne!(after, before);
        }
    }

    #[test]
    fn test_perturb_size_scales_noise() {
        let mutation = GaussianMutation::with_params(1.0, 0.0, 5.0, 1.0).unwrap();
        let mut genome = vec![1.0, 2.0];
        let mut rng = RandomNumberGenerator::new();

        mutation.mutate(&mut genome, &mut rng).unwrap();

        assert_eq!(genome, vec![1.0, 2.0]);
    }

    #[test]
    fn test_zero_sigma_shifts_by_mean() {
        let mutation = GaussianMutation::with_params(1.0, 2.0, 0.5, 0.0).unwrap();
        let mut genome = vec![1.0, 2.0];
        let mut rng = RandomNumberGenerator::new();

        mutation.mutate(&mut genome, &mut rng).unwrap();

        assert_eq!(genome, vec![2.0, 3.0]);
    }

    #[test]
    fn test_defaults() {
        let mutation = GaussianMutation::default();
        assert_eq!(mutation.probability(), 0.01);
        assert_eq!(mutation.perturb_size(), 1.0);
        assert_eq!(mutation.mu(), 0.0);
        assert_eq!(mutation.sigma(), 0.1);

        let builder = GaussianMutation::new(0.2)
            .unwrap()
            .with_perturb_size(3.0)
            .unwrap()
            .with_mu(1.0)
            .unwrap();
        assert_eq!(builder.perturb_size(), 3.0);
        assert_eq!(builder.mu(), 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(GaussianMutation::new(2.0).is_err());
        assert!(GaussianMutation::new(0.1).unwrap().with_sigma(-1.0).is_err());
        assert!(GaussianMutation::with_params(0.1, 1.0, 0.0, f64::INFINITY).is_err());
        assert!(GaussianMutation::with_params(0.1, f64::NAN, 0.0, 0.1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_parameters() {
        let valid = r#"{"probability":0.2,"perturb_size":1.0,"mu":0.0,"sigma":0.5}"#;
        let mutation: GaussianMutation = serde_json::from_str(valid).unwrap();
        assert_eq!(mutation, GaussianMutation::with_params(0.2, 1.0, 0.0, 0.5).unwrap());

        let negative_sigma = r#"{"probability":0.2,"perturb_size":1.0,"mu":0.0,"sigma":-1.0}"#;
        assert!(serde_json::from_str::<GaussianMutation>(negative_sigma).is_err());

        let bad_probability = r#"{"probability":5.0,"perturb_size":1.0,"mu":0.0,"sigma":0.1}"#;
        assert!(serde_json::from_str::<GaussianMutation>(bad_probability).is_err());
    }
}
