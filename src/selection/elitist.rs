use crate::error::{GeneticError, Result};
use crate::ranking::argsort;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Selects the best individuals by fitness.
///
/// All indices are ranked by descending fitness and the first `n` are returned,
/// best first. The result is deterministic given the fitness values. This is
/// also the ranking used for elitism.
///
/// # Examples
///
/// ```
/// use genetools::selection::BestSelection;
///
/// let fitness = vec![0.5, 0.8, 0.3];
/// assert_eq!(BestSelection::rank(&fitness, 2).unwrap(), vec![1, 0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BestSelection;

/// Selects the worst individuals by fitness, worst first.
///
/// For `n == fitness.len()` the result is the exact reverse of
/// [`BestSelection`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstSelection;

fn take_ranked(fitness: &[f64], num_to_select: usize, descending: bool) -> Result<Vec<usize>> {
    if num_to_select > fitness.len() {
        return Err(GeneticError::InvalidCardinality {
            requested: num_to_select,
            available: fitness.len(),
        });
    }

    let mut order = argsort(fitness, descending);
    order.truncate(num_to_select);
    Ok(order)
}

impl BestSelection {
    /// Returns the indices of the `num_to_select` fittest individuals, best first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCardinality` if `num_to_select > fitness.len()`.
    pub fn rank(fitness: &[f64], num_to_select: usize) -> Result<Vec<usize>> {
        take_ranked(fitness, num_to_select, true)
    }
}

impl WorstSelection {
    /// Returns the indices of the `num_to_select` least fit individuals, worst first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCardinality` if `num_to_select > fitness.len()`.
    pub fn rank(fitness: &[f64], num_to_select: usize) -> Result<Vec<usize>> {
        take_ranked(fitness, num_to_select, false)
    }
}

impl SelectionStrategy for BestSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        Self::rank(fitness, num_to_select)
    }
}

impl SelectionStrategy for WorstSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        Self::rank(fitness, num_to_select)
    }
}
