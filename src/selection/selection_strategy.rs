use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy maps the fitness scores of a population to a sequence
/// of indices into that population. Whether the result may contain duplicates
/// depends on the strategy's replacement policy. The order of the returned
/// indices is selection order, except for the rank-based strategies which
/// return rank order.
///
/// # Examples
///
/// ```
/// use genetools::selection::{BestSelection, SelectionStrategy};
/// use genetools::rng::RandomNumberGenerator;
/// use genetools::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selected = BestSelection.select(&fitness, 2, &mut rng)?;
///
///     assert_eq!(selected, vec![1, 0]);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug {
    /// Selects individuals based on their fitness scores.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of the population, higher is better.
    /// * `num_to_select` - The number of indices to return.
    /// * `rng` - The random source; deterministic strategies ignore it.
    ///
    /// # Returns
    ///
    /// A vector of `num_to_select` indices into `fitness`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - More individuals are requested than the strategy can provide
    /// - The fitness values are unusable for the strategy (e.g. negative values
    ///   in a proportional scheme)
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}
