use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::ranking::sort_lists;
use crate::rng::RandomNumberGenerator;
use crate::selection::roulette::check_proportional;
use crate::selection::selection_strategy::SelectionStrategy;

/// Stochastic Universal Sampling.
///
/// Fitness values are sorted in descending order and normalized to sum to one.
/// `n` equally spaced pointers are laid over the cumulative fitness, starting
/// at a uniform offset in `[0, 1/n)`; each pointer selects the individual whose
/// slice of the cumulative sum it falls into. Exactly `n` indices are returned
/// and each individual is picked within one of its expected count.
///
/// Like roulette wheel selection it requires non-negative fitness values with
/// a positive total.
///
/// # Examples
///
/// ```
/// use genetools::selection::{SelectionStrategy, StochasticUniversalSampling};
/// use genetools::rng::RandomNumberGenerator;
///
/// let fitness = vec![1.0, 1.0, 2.0];
/// let mut rng = RandomNumberGenerator::from_seed(9);
///
/// let selected = StochasticUniversalSampling.select(&fitness, 4, &mut rng).unwrap();
/// assert_eq!(selected.iter().filter(|&&i| i == 2).count(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUniversalSampling;

impl SelectionStrategy for StochasticUniversalSampling {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if num_to_select == 0 {
            return Ok(Vec::new());
        }

        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let weights = check_proportional(fitness)?;
        let total: f64 = weights.iter().sum();
        let indices: Vec<usize> = (0..weights.len()).collect();
        let (sorted, order) = sort_lists(&weights, &indices, true);
        let normalized: Vec<f64> = sorted.iter().map(|f| f / total).collect();

        // Positive entries come first in descending order.
        let last_positive = normalized.iter().rposition(|&f| f > 0.0).unwrap_or(0);

        let distance = 1.0 / num_to_select as f64;
        let start = rng.uniform_range(0.0, distance);
        trace!(start, distance, "universal sampling pointers");

        let selected = (0..num_to_select)
            .map(|k| {
                let pointer = start + k as f64 * distance;
                let mut position = 0;
                let mut cumulative = normalized[0];
                while cumulative < pointer && position < last_positive {
                    position += 1;
                    cumulative += normalized[position];
                }
                order[position]
            })
            .collect();

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sus_returns_exact_count() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::new();

        for n in [1, 2, 5, 7, 20] {
            let selected = StochasticUniversalSampling
                .select(&fitness, n, &mut rng)
                .unwrap();
            assert_eq!(selected.len(), n);
            assert!(selected.iter().all(|&i| i < fitness.len()));
        }
    }

    #[test]
    fn test_sus_concentrated_fitness() {
        let fitness = vec![0.0, 0.0, 4.0, 0.0];
        let mut rng = RandomNumberGenerator::new();

        let selected = StochasticUniversalSampling
            .select(&fitness, 6, &mut rng)
            .unwrap();

        assert_eq!(selected, vec![2; 6]);
    }

    #[test]
    fn test_sus_proportional_counts() {
        // Shares of 0.5, 0.25 and 0.25 with 8 pointers give exact counts.
        let fitness = vec![1.0, 2.0, 1.0];
        let mut rng = RandomNumberGenerator::from_seed(13);

        let selected = StochasticUniversalSampling
            .select(&fitness, 8, &mut rng)
            .unwrap();

        let count = |target: usize| selected.iter().filter(|&&i| i == target).count();
        assert_eq!(count(1), 4);
        assert_eq!(count(0), 2);
        assert_eq!(count(2), 2);
    }

    #[test]
    fn test_sus_select_zero() {
        let mut rng = RandomNumberGenerator::new();
        assert!(StochasticUniversalSampling
            .select(&[1.0], 0, &mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_sus_degenerate_fitness() {
        let mut rng = RandomNumberGenerator::new();

        let zero = StochasticUniversalSampling.select(&[0.0, 0.0], 2, &mut rng);
        assert!(matches!(zero, Err(GeneticError::DegenerateFitness(_))));

        let negative = StochasticUniversalSampling.select(&[1.0, -1.0], 2, &mut rng);
        assert!(matches!(negative, Err(GeneticError::DegenerateFitness(_))));

        let nan = StochasticUniversalSampling.select(&[1.0, f64::NAN], 2, &mut rng);
        assert!(matches!(nan, Err(GeneticError::InvalidNumericValue(_))));
    }

    #[test]
    fn test_sus_huge_fitness() {
        // The plain sum of these values overflows.
        let fitness = vec![f64::MAX, f64::MAX, 0.0];
        let mut rng = RandomNumberGenerator::from_seed(8);

        let selected = StochasticUniversalSampling
            .select(&fitness, 4, &mut rng)
            .unwrap();

        let count = |target: usize| selected.iter().filter(|&&i| i == target).count();
        assert_eq!(count(0), 2);
        assert_eq!(count(1), 2);
        assert_eq!(count(2), 0);
    }
}
