use super::CrossoverOperator;
use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// One-point crossover.
///
/// A cut point is drawn uniformly in `[1, size - 2]`, where `size` is the
/// shorter parent's length, so the cut always falls strictly between the first
/// and the last gene. The first child takes the head of the first parent and
/// the tail of the second, the second child the opposite. Both children are
/// `size` genes long.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Smallest parent length with a non-empty range of cut points.
    pub const MIN_LENGTH: usize = 3;

    /// Draws a cut point for parents whose shorter length is `size`.
    pub fn cut_point(size: usize, rng: &mut RandomNumberGenerator) -> Result<usize> {
        if size < Self::MIN_LENGTH {
            return Err(GeneticError::GenomeTooShort(format!(
                "One-point crossover needs genomes of at least {} genes, got {}",
                Self::MIN_LENGTH,
                size
            )));
        }
        Ok(rng.range(1, size - 1))
    }
}

impl<G> CrossoverOperator<G> for OnePointCrossover
where
    G: Clone,
{
    fn crossover(
        &self,
        first: &[G],
        second: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome<G>, Genome<G>)> {
        let size = first.len().min(second.len());
        let point = Self::cut_point(size, rng)?;

        let child1 = first[..point]
            .iter()
            .chain(&second[point..size])
            .cloned()
            .collect();
        let child2 = second[..point]
            .iter()
            .chain(&first[point..size])
            .cloned()
            .collect();

        Ok((child1, child2))
    }
}
