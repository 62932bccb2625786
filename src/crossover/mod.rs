//! # Crossover
//!
//! Crossover operators recombine two parent genomes into two children. Parents
//! of different lengths are not an error: the children are as long as the
//! shorter parent and the surplus genes of the longer one are dropped.
pub mod one_point;
pub mod uniform;

use std::fmt::Debug;

use crate::{error::Result, genome::Genome, rng::RandomNumberGenerator};

/// # CrossoverOperator
///
/// The `CrossoverOperator` trait defines how two parent genomes are combined.
/// Implementations are generic over the gene type `G`; only `Clone` is needed
/// to copy genes into the children.
pub trait CrossoverOperator<G>: Debug
where
    G: Clone,
{
    /// Produces two children from `first` and `second`.
    ///
    /// ## Returns
    ///
    /// Two genomes of length `min(first.len(), second.len())`.
    ///
    /// ## Errors
    ///
    /// Fails when the operator cannot work on parents of this length.
    fn crossover(
        &self,
        first: &[G],
        second: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome<G>, Genome<G>)>;
}

pub use one_point::OnePointCrossover;
pub use uniform::UniformCrossover;
