//! # Selection
//!
//! Strategies that turn a fitness vector into a sequence of parent indices:
//! best-k, worst-k, uniform random, roulette wheel, tournament and stochastic
//! universal sampling. All of them implement [`SelectionStrategy`].
pub mod elitist;
pub mod random;
pub mod roulette;
pub mod selection_strategy;
pub mod sus;
pub mod tournament;

pub use elitist::{BestSelection, WorstSelection};
pub use random::RandomSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use sus::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
