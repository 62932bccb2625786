//! # Mutation
//!
//! Mutation perturbs the genes of a single genome in place. Every strategy
//! receives an exclusive `&mut [G]` handle, so the genome cannot be observed
//! elsewhere while it is being changed, and the genome's length never changes.
//!
//! The numeric strategies ([`GaussianMutation`], [`UniformMutation`]) work on
//! real-valued genes. Any other encoding can plug in a closure through
//! [`FnMutation`].
//!
//! ## Example
//!
//! ```rust
//! use genetools::mutation::{FnMutation, MutationStrategy};
//! use genetools::rng::RandomNumberGenerator;
//!
//! let flip = FnMutation::new(|genome: &mut [bool], _rng: &mut RandomNumberGenerator| {
//!     for gene in genome.iter_mut() {
//!         *gene = !*gene;
//!     }
//! });
//!
//! let mut genome = vec![true, false];
//! flip.mutate(&mut genome, &mut RandomNumberGenerator::new()).unwrap();
//! assert_eq!(genome, vec![false, true]);
//! ```
pub mod gaussian;
pub mod uniform;

use std::fmt::{self, Debug};

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Trait for mutation operators.
///
/// `mutate` changes `genome` in place using the provided random number
/// generator. Errors are reserved for configurations that cannot be applied
/// to the genome at hand.
pub trait MutationStrategy<G>: Debug {
    fn mutate(&self, genome: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()>;
}

impl<G, M> MutationStrategy<G> for &M
where
    M: MutationStrategy<G> + ?Sized,
{
    fn mutate(&self, genome: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        (**self).mutate(genome, rng)
    }
}

/// Adapts a closure into a [`MutationStrategy`].
#[derive(Clone)]
pub struct FnMutation<F> {
    function: F,
}

impl<F> FnMutation<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Debug for FnMutation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMutation").finish_non_exhaustive()
    }
}

impl<G, F> MutationStrategy<G> for FnMutation<F>
where
    F: Fn(&mut [G], &mut RandomNumberGenerator),
{
    fn mutate(&self, genome: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        (self.function)(genome, rng);
        Ok(())
    }
}

/// Validates a per-gene mutation probability.
pub(crate) fn check_probability(probability: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneticError::Configuration(format!(
            "Mutation probability must be in [0, 1], got {}",
            probability
        )));
    }
    Ok(probability)
}

pub use gaussian::GaussianMutation;
pub use uniform::UniformMutation;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_mutation_receives_rng() {
        let shift = FnMutation::new(|genome: &mut [f64], rng: &mut RandomNumberGenerator| {
            for gene in genome.iter_mut() {
                *gene += rng.uniform_range(1.0, 2.0);
            }
        });
        let mut genome = vec![0.0; 4];
        let mut rng = RandomNumberGenerator::from_seed(2);

        shift.mutate(&mut genome, &mut rng).unwrap();

        assert!(genome.iter().all(|g| (1.0..2.0).contains(g)));
        assert_eq!(format!("{:?}", shift), "FnMutation { .. }");
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(check_probability(1.01).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }
}
