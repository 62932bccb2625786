use std::fmt;

use crate::{
    error::Result,
    rng::RandomNumberGenerator,
    selection::{
        BestSelection, RandomSelection, RouletteWheelSelection, SelectionStrategy,
        StochasticUniversalSampling, TournamentSelection,
    },
};

/// How the parents of a generation are picked.
///
/// The variant fixes both the parent selection and, for `BreedRoulette`, the
/// way parents are paired while breeding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScheme {
    /// The `n_parents` fittest individuals.
    Best { n_parents: usize },
    /// `tournaments` tournaments of `tour_size` contenders, winners leave the pool.
    Tournament { tournaments: usize, tour_size: usize },
    /// `tournaments` roulette wheel draws without replacement.
    Roulette { tournaments: usize },
    /// `tournaments` individuals drawn uniformly without replacement, later
    /// paired by a roulette wheel over their own fitness.
    BreedRoulette { tournaments: usize },
    /// `n_parents` stochastic universal sampling pointers.
    Sus { n_parents: usize },
}

impl SelectionScheme {
    /// Number of parent indices the scheme yields.
    pub fn num_parents(&self) -> usize {
        match *self {
            Self::Best { n_parents } | Self::Sus { n_parents } => n_parents,
            Self::Tournament { tournaments, .. }
            | Self::Roulette { tournaments }
            | Self::BreedRoulette { tournaments } => tournaments,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Best { .. } => "best",
            Self::Tournament { .. } => "tournament",
            Self::Roulette { .. } => "roulette",
            Self::BreedRoulette { .. } => "breed_roulette",
            Self::Sus { .. } => "sus",
        }
    }

    /// Whether parents are paired by roulette wheel instead of uniformly.
    pub fn pairs_by_roulette(&self) -> bool {
        matches!(self, Self::BreedRoulette { .. })
    }

    /// Selects parent indices from `fitness`.
    ///
    /// # Errors
    ///
    /// Propagates the selection error, e.g. `InvalidCardinality` when more
    /// parents are requested than individuals exist, or `DegenerateFitness`
    /// for proportional schemes over unusable fitness.
    pub fn select_parents(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let num_parents = self.num_parents();
        match *self {
            Self::Best { .. } => BestSelection.select(fitness, num_parents, rng),
            Self::Tournament { tour_size, .. } => {
                TournamentSelection::new(tour_size, false)?.select(fitness, num_parents, rng)
            }
            Self::Roulette { .. } => {
                RouletteWheelSelection::new().select(fitness, num_parents, rng)
            }
            Self::BreedRoulette { .. } => {
                RandomSelection::new(false).select(fitness, num_parents, rng)
            }
            Self::Sus { .. } => StochasticUniversalSampling.select(fitness, num_parents, rng),
        }
    }
}

impl fmt::Display for SelectionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use std::collections::HashSet;

    const FITNESS: [f64; 6] = [3.0, 9.0, 1.0, 7.0, 5.0, 2.0];

    #[test]
    fn test_best_scheme_is_ranked() {
        let mut rng = RandomNumberGenerator::new();
        let parents = SelectionScheme::Best { n_parents: 3 }
            .select_parents(&FITNESS, &mut rng)
            .unwrap();

        assert_eq!(parents, vec![1, 3, 4]);
    }

    #[test]
    fn test_schemes_yield_requested_count() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let schemes = [
            SelectionScheme::Tournament {
                tournaments: 4,
                tour_size: 2,
            },
            SelectionScheme::Roulette { tournaments: 4 },
            SelectionScheme::BreedRoulette { tournaments: 4 },
            SelectionScheme::Sus { n_parents: 4 },
        ];

        for scheme in schemes {
            let parents = scheme.select_parents(&FITNESS, &mut rng).unwrap();
            assert_eq!(parents.len(), 4, "{}", scheme);
            assert!(parents.iter().all(|&p| p < FITNESS.len()));
        }
    }

    #[test]
    fn test_without_replacement_schemes_are_distinct() {
        let mut rng = RandomNumberGenerator::new();
        for scheme in [
            SelectionScheme::Tournament {
                tournaments: 6,
                tour_size: 3,
            },
            SelectionScheme::Roulette { tournaments: 6 },
            SelectionScheme::BreedRoulette { tournaments: 6 },
        ] {
            let parents = scheme.select_parents(&FITNESS, &mut rng).unwrap();
            let unique: HashSet<_> = parents.iter().collect();
            assert_eq!(unique.len(), 6, "{}", scheme);
        }
    }

    #[test]
    fn test_too_many_parents() {
        let mut rng = RandomNumberGenerator::new();
        let scheme = SelectionScheme::Roulette { tournaments: 7 };
        let result = scheme.select_parents(&FITNESS, &mut rng);

        assert!(matches!(
            result,
            Err(GeneticError::InvalidCardinality {
                requested: 7,
                available: 6
            })
        ));
    }

    #[test]
    fn test_zero_tour_size() {
        let mut rng = RandomNumberGenerator::new();
        let scheme = SelectionScheme::Tournament {
            tournaments: 2,
            tour_size: 0,
        };

        assert!(matches!(
            scheme.select_parents(&FITNESS, &mut rng),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(SelectionScheme::Sus { n_parents: 1 }.to_string(), "sus");
        assert!(SelectionScheme::BreedRoulette { tournaments: 2 }.pairs_by_roulette());
        assert!(!SelectionScheme::Roulette { tournaments: 2 }.pairs_by_roulette());
    }
}
