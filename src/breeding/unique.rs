use tracing::{debug, warn};

use super::{parent_genome, BreedStrategy};
use crate::{
    crossover::{CrossoverOperator, UniformCrossover},
    error::Result,
    genome::{Genome, Population},
    rng::RandomNumberGenerator,
};

/// Breeds every parent exactly once.
///
/// Parent `i` is paired with parent `len - 1 - i` for the first half of the
/// list, one crossover per pair, giving `len / 2` children. With an odd number
/// of parents a warning is logged and the middle parent stays unpaired.
/// `num_children` is ignored.
#[derive(Debug, Clone)]
pub struct UniqueBreeding<C> {
    crossover: C,
}

impl<C> UniqueBreeding<C> {
    pub fn new(crossover: C) -> Self {
        Self { crossover }
    }
}

impl Default for UniqueBreeding<UniformCrossover> {
    fn default() -> Self {
        Self::new(UniformCrossover::default())
    }
}

impl<G, C> BreedStrategy<G> for UniqueBreeding<C>
where
    G: Clone,
    C: CrossoverOperator<G>,
{
    fn breed(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        _fitness: &[f64],
        _num_children: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        let len = parents.len();
        if len % 2 != 0 {
            warn!(
                parents = len,
                unpaired = parents[len / 2],
                "odd number of parents, the middle parent is left unpaired"
            );
        }

        let mut children = Vec::with_capacity(len / 2);
        for i in 0..len / 2 {
            let first = parent_genome(population, parents[i])?;
            let second = parent_genome(population, parents[len - 1 - i])?;
            let (child, _) = self.crossover.crossover(first, second, rng)?;
            children.push(child);
        }

        debug!(children = children.len(), "bred each parent pair once");
        Ok(children)
    }
}
