use tracing::debug;

use super::{parent_genome, require_pair, BreedStrategy};
use crate::{
    crossover::{CrossoverOperator, UniformCrossover},
    error::{GeneticError, OptionExt, Result},
    genome::{Genome, Population},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

/// Breeds children from pairs drawn by roulette wheel over the parent pool.
///
/// The wheel only holds the already selected parents, weighted by their own
/// fitness, so fitter parents among them mate more often. Each pair is two
/// distinct positions of the parent list. The parents need non-negative
/// fitness with at least two positive entries.
#[derive(Debug, Clone)]
pub struct RouletteBreeding<C> {
    crossover: C,
}

impl<C> RouletteBreeding<C> {
    pub fn new(crossover: C) -> Self {
        Self { crossover }
    }
}

impl Default for RouletteBreeding<UniformCrossover> {
    fn default() -> Self {
        Self::new(UniformCrossover::default())
    }
}

impl<G, C> BreedStrategy<G> for RouletteBreeding<C>
where
    G: Clone,
    C: CrossoverOperator<G>,
{
    fn breed(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        fitness: &[f64],
        num_children: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        require_pair(parents)?;

        let parent_fitness = parents
            .iter()
            .map(|&p| {
                fitness.get(p).copied().ok_or_else_genetic(|| {
                    GeneticError::Breeding(format!(
                        "Parent index {} has no fitness value among {}",
                        p,
                        fitness.len()
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let wheel = RouletteWheelSelection::new();
        let mut children = Vec::with_capacity(num_children);
        for _ in 0..num_children {
            let pair = wheel.select(&parent_fitness, 2, rng)?;
            let first = parent_genome(population, parents[pair[0]])?;
            let second = parent_genome(population, parents[pair[1]])?;
            let (child, _) = self.crossover.crossover(first, second, rng)?;
            children.push(child);
        }

        debug!(
            parents = parents.len(),
            children = children.len(),
            "bred children from roulette paired parents"
        );
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roulette_breeding_count() {
        let mut rng = RandomNumberGenerator::new();
        let population = vec![vec!['a'; 3], vec!['b'; 3], vec!['c'; 3]];
        let fitness = vec![1.0, 2.0, 3.0];

        let children = RouletteBreeding::<UniformCrossover>::default()
            .breed(&population, &[0, 1, 2], &fitness, 7, &mut rng)
            .unwrap();

        assert_eq!(children.len(), 7);
        assert!(children.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_roulette_breeding_prefers_positive_parents() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let population = vec![vec![0; 4], vec![1; 4], vec![2; 4], vec![3; 4]];
        let fitness = vec![0.0, 5.0, 0.0, 5.0];

        // Parents 0 and 2 carry no weight, so every pair is (1, 3).
        let children = RouletteBreeding::<UniformCrossover>::default()
            .breed(&population, &[0, 1, 2, 3], &fitness, 10, &mut rng)
            .unwrap();

        for child in children {
            assert!(child.iter().all(|&g| g == 1 || g == 3));
        }
    }

    #[test]
    fn test_roulette_breeding_single_positive_parent() {
        let mut rng = RandomNumberGenerator::new();
        let population = vec![vec![0.0; 3], vec![1.0; 3]];

        let breeding = RouletteBreeding::<UniformCrossover>::default();
        let result = breeding.breed(&population, &[0, 1], &[4.0, 0.0], 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::DegenerateFitness(_))));
    }

    #[test]
    fn test_roulette_breeding_missing_fitness() {
        let mut rng = RandomNumberGenerator::new();
        let population = vec![vec![0.0; 3], vec![1.0; 3]];

        let breeding = RouletteBreeding::<UniformCrossover>::default();
        let result = breeding.breed(&population, &[0, 1], &[1.0], 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }
}
