pub mod breeding;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod mutation;
pub mod ranking;
pub mod rng;
pub mod sampling;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionOptions, Evolver, SelectionScheme};
pub use genome::{Genome, Population};
pub use rng::RandomNumberGenerator;
