use tracing::trace;

use crate::error::{GeneticError, OptionExt, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Each draw takes a
/// uniform value in `[0, total)` and walks the wheel, subtracting fitness values
/// until the remainder goes negative.
///
/// Without replacement the winner is removed from the wheel and the total is
/// recomputed before the next draw, so later draws spin a smaller wheel.
///
/// This strategy requires all fitness values to be non-negative and the wheel
/// to hold a positive total at every draw. A wheel whose remaining fitness is
/// all zero is reported as `DegenerateFitness` instead of falling back to
/// another scheme.
///
/// # Examples
///
/// ```
/// use genetools::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genetools::rng::RandomNumberGenerator;
/// use genetools::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = RouletteWheelSelection::new();
///     let selected = selection.select(&fitness, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RouletteWheelSelection {
    /// Whether a selected individual stays on the wheel.
    replacement: bool,
}

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy without replacement.
    pub fn new() -> Self {
        Self { replacement: false }
    }

    /// Creates a new RouletteWheelSelection strategy with the specified replacement policy.
    pub fn with_replacement(replacement: bool) -> Self {
        Self { replacement }
    }

    /// Spins the wheel once and returns the winning position in `wheel`.
    fn spin(wheel: &[(usize, f64)], total: f64, rng: &mut RandomNumberGenerator) -> Result<usize> {
        let mut remainder = rng.uniform() * total;

        for (position, &(_, fitness)) in wheel.iter().enumerate() {
            remainder -= fitness;
            if remainder < 0.0 {
                return Ok(position);
            }
        }

        // Rounding can leave a tiny non-negative remainder after the last slot.
        wheel
            .iter()
            .rposition(|&(_, fitness)| fitness > 0.0)
            .ok_or_else_genetic(|| {
                GeneticError::DegenerateFitness(
                    "Roulette wheel has no individual with positive fitness".to_string(),
                )
            })
    }
}

impl Default for RouletteWheelSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects fitness vectors that proportional selection cannot handle and
/// returns the weights scaled by the largest fitness.
///
/// Scaling keeps the wheel total finite for any finite, non-negative input,
/// including values near `f64::MAX` whose plain sum overflows.
pub(crate) fn check_proportional(fitness: &[f64]) -> Result<Vec<f64>> {
    if let Some((i, value)) = fitness.iter().enumerate().find(|(_, f)| !f.is_finite()) {
        return Err(GeneticError::InvalidNumericValue(format!(
            "Non-finite fitness score {} at index {}",
            value, i
        )));
    }

    if let Some(negative) = fitness.iter().find(|&&f| f < 0.0) {
        return Err(GeneticError::DegenerateFitness(format!(
            "Proportional selection requires non-negative fitness values, found {}",
            negative
        )));
    }

    let max = fitness.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return Err(GeneticError::DegenerateFitness(
            "Proportional selection requires a positive total fitness, found 0".to_string(),
        ));
    }

    Ok(fitness.iter().map(|f| f / max).collect())
}

impl SelectionStrategy for RouletteWheelSelection {
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

        if !self.replacement && num_to_select > fitness.len() {
            return Err(GeneticError::InvalidCardinality {
                requested: num_to_select,
                available: fitness.len(),
            });
        }

        let weights = check_proportional(fitness)?;
        let mut total: f64 = weights.iter().sum();
        let mut wheel: Vec<(usize, f64)> = weights.into_iter().enumerate().collect();
        let mut selected = Vec::with_capacity(num_to_select);

        for draw in 0..num_to_select {
            if total <= 0.0 {
                return Err(GeneticError::DegenerateFitness(format!(
                    "Remaining roulette wheel has zero total fitness at draw {} of {}",
                    draw + 1,
                    num_to_select
                )));
            }

            let position = Self::spin(&wheel, total, rng)?;
            let (index, _) = wheel[position];
            trace!(draw, index, total, "roulette wheel draw");
            selected.push(index);

            if !self.replacement {
                wheel.remove(position);
                total = wheel.iter().map(|&(_, f)| f).sum();
            }
        }

        Ok(selected)
    }
}
