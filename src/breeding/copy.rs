use super::{parent_genome, BreedStrategy};
use crate::{
    error::Result,
    genome::{Genome, Population},
    rng::RandomNumberGenerator,
};

/// Passes the listed parents through as verbatim clones.
///
/// `num_children` is ignored; one clone is returned per listed parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyBreeding;

impl<G> BreedStrategy<G> for CopyBreeding
where
    G: Clone,
{
    fn breed(
        &self,
        population: &[Genome<G>],
        parents: &[usize],
        _fitness: &[f64],
        _num_children: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        parents
            .iter()
            .map(|&p| parent_genome(population, p).cloned())
            .collect()
    }
}
