//! # UniformBreeding
//!
//! Every child comes from a pair of parents drawn uniformly at random from the
//! parent list. Within one pair the two parents occupy different positions of
//! the list; across children the same parent can be drawn again. Only the first
//! child of each crossover is kept.
use tracing::debug;

use super::{parent_genome, require_pair, BreedStrategy};
use crate::{
    crossover::{CrossoverOperator, OnePointCrossover, UniformCrossover},
    error::Result,
    genome::{Genome, Population},
    rng::RandomNumberGenerator,
    sampling::sample_indices,
};

#[derive(Debug, Clone)]
pub struct UniformBreeding<C> {
    crossover: C,
}

impl<C> UniformBreeding<C> {
    /// Creates a uniform-pairing breeder around any crossover operator.
    pub fn new(crossover: C) -> Self {
        Self { crossover }
    }

    pub fn crossover(&self) -> &C {
        &self.crossover
    }
}

impl UniformBreeding<UniformCrossover> {
    /// Uniform pairing with uniform crossover at the given swap probability.
    pub fn uniform(probability: f64) -> Result<Self> {
        Ok(Self::new(UniformCrossover::new(probability)?))
    }
}

impl UniformBreeding<OnePointCrossover> {
    /// Uniform pairing with one-point crossover.
    pub fn one_point() -> Self {
        Self::new(OnePointCrossover)
    }
}

impl Default for UniformBreeding<UniformCrossover> {
    fn default() -> Self {
        Self::new(UniformCrossover::default())
    }
}

impl<G, C> BreedStrategy<G> for UniformBreeding<C>
where
    G: Clone,
    C: CrossoverOperator<G>,
{
    fn breed(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        _fitness: &[f64],
        num_children: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        require_pair(parents)?;

        let mut children = Vec::with_capacity(num_children);
        for _ in 0..num_children {
            let pair = sample_indices(parents.len(), 2, false, rng)?;
            let first = parent_genome(population, parents[pair[0]])?;
            let second = parent_genome(population, parents[pair[1]])?;
            let (child, _) = self.crossover.crossover(first, second, rng)?;
            children.push(child);
        }

        debug!(
            parents = parents.len(),
            children = children.len(),
            "bred children from uniformly paired parents"
        );
        Ok(children)
    }
}
