use tracing::trace;

use crate::error::{GeneticError, OptionExt, Result};
use crate::rng::RandomNumberGenerator;
use crate::sampling::sample_indices;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` contenders uniformly, with
/// replacement, from the current pool and picks the one with the highest
/// fitness. On a tie the first pool entry holding the winning value wins.
///
/// Without replacement the winner leaves the pool, so later tournaments are
/// held among the remaining individuals and at most `fitness.len()`
/// tournaments can be run.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use genetools::selection::{SelectionStrategy, TournamentSelection};
/// use genetools::rng::RandomNumberGenerator;
/// use genetools::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = TournamentSelection::new(3, false)?;
///     let selected = selection.select(&fitness, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TournamentParams"))]
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    tournament_size: usize,
    replacement: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TournamentParams {
    tournament_size: usize,
    replacement: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<TournamentParams> for TournamentSelection {
    type Error = GeneticError;

    fn try_from(params: TournamentParams) -> Result<Self> {
        Self::new(params.tournament_size, params.replacement)
    }
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of contenders drawn per tournament.
    ///   Must be at least 1. A tournament size of 1 is equivalent to random selection.
    /// * `replacement` - Whether a winner stays in the pool for later tournaments.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize, replacement: bool) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            replacement,
        })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn with_replacement(mut self) -> Self {
        self.replacement = true;
        self
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament over `pool` and returns the winning position.
    fn run_tournament(
        &self,
        pool: &[(usize, f64)],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let contenders = sample_indices(pool.len(), self.tournament_size, true, rng)?;

        let best = contenders
            .iter()
            .map(|&position| pool[position].1)
            .fold(f64::NEG_INFINITY, f64::max);

        pool.iter()
            .position(|&(_, fitness)| fitness == best)
            .ok_or_else_genetic(|| {
                GeneticError::Other("Tournament winner is missing from the pool".to_string())
            })
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: 2,
            replacement: false,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
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

        let mut pool: Vec<(usize, f64)> = fitness.iter().copied().enumerate().collect();
        let mut selected = Vec::with_capacity(num_to_select);

        for tournament in 0..num_to_select {
            let winner = self.run_tournament(&pool, rng)?;
            let (index, score) = pool[winner];
            trace!(tournament, index, score, "tournament winner");
            selected.push(index);

            if !self.replacement {
                pool.remove(winner);
            }
        }

        Ok(selected)
    }
}
