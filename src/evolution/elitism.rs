use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    genome::{check_aligned, Genome},
    selection::BestSelection,
};

/// Number of elites kept for a population of `len` at the given `rate`.
///
/// Rounds half to even, so `0.05 * 10` keeps nobody while `0.05 * 30` keeps
/// two individuals. The result never exceeds `len`.
pub fn elite_count(len: usize, rate: f64) -> usize {
    let count = (rate * len as f64).round_ties_even();
    if count <= 0.0 {
        0
    } else {
        (count as usize).min(len)
    }
}

/// Overwrites the first slots of `offspring` with copies of the best
/// individuals of `population`, fittest first.
///
/// Returns the number of slots overwritten.
///
/// # Errors
///
/// Fails if `population` and `fitness` are not aligned, or with
/// `GeneticError::InvalidCardinality` if `offspring` is too short to hold the
/// elites.
pub fn apply_elitism<G: Clone>(
    population: &[Genome<G>],
    fitness: &[f64],
    offspring: &mut [Genome<G>],
    rate: f64,
) -> Result<usize> {
    check_aligned(population, fitness)?;

    let count = elite_count(fitness.len(), rate);
    if count == 0 {
        debug!(population = fitness.len(), rate, "no elites kept");
        return Ok(0);
    }

    if count > offspring.len() {
        return Err(GeneticError::InvalidCardinality {
            requested: count,
            available: offspring.len(),
        });
    }

    let elites = BestSelection::rank(fitness, count)?;
    for (slot, &elite) in offspring.iter_mut().zip(&elites) {
        slot.clone_from(&population[elite]);
    }

    debug!(elites = ?elites, "copied elites into the new generation");
    Ok(count)
}
