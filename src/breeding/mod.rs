//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! children from a set of selected parents. Parents are given as indices into the current
//! population; the population and its fitness are only read, never modified.
pub mod copy;
pub mod roulette;
pub mod uniform;
pub mod unique;

use std::fmt::Debug;

use crate::{
    error::{GeneticError, OptionExt, Result},
    genome::{Genome, Population},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Breeds children from the parents at `parents` in `population`.
pub trait BreedStrategy<G>: Debug
where
    G: Clone,
{
    /// Breeds new genomes from a set of parent indices.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current generation.
    /// - `parents`: Indices into `population` of the individuals allowed to breed. May
    ///   contain duplicates.
    /// - `fitness`: The fitness of the whole population, index-aligned with it.
    /// - `num_children`: How many children to produce. Strategies with a fixed output
    ///   size document that they ignore it.
    /// - `rng`: The random source.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - There are too few parents for the strategy
    /// - A parent index is out of range
    /// - The crossover operator rejects the parents
    fn breed(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        fitness: &[f64],
        num_children: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>>;
}

/// Looks up a parent genome, reporting out-of-range indices.
pub(crate) fn parent_genome<G>(population: &[Genome<G>], index: usize) -> Result<&Genome<G>> {
    population.get(index).ok_or_else_genetic(|| {
        GeneticError::Breeding(format!(
            "Parent index {} is out of range for a population of {}",
            index,
            population.len()
        ))
    })
}

/// Fails unless at least two parents are available to form a pair.
pub(crate) fn require_pair(parents: &[usize]) -> Result<()> {
    if parents.len() < 2 {
        return Err(GeneticError::Breeding(format!(
            "At least two parents are needed to breed, got {}",
            parents.len()
        )));
    }
    Ok(())
}

pub use copy::CopyBreeding;
pub use roulette::RouletteBreeding;
pub use uniform::UniformBreeding;
pub use unique::UniqueBreeding;
