//! # Evolution
//!
//! One generation transition: parent selection, breeding, mutation and
//! elitism composed into a single call. The caller owns the generation loop
//! and evaluates fitness between calls.
pub mod elitism;
pub mod evolver;
pub mod options;
pub mod scheme;

pub use elitism::{apply_elitism, elite_count};
pub use evolver::{
    evolve, evolve_best, evolve_breed_roulette, evolve_roulette, evolve_sus, evolve_tournament,
    Evolver,
};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use scheme::SelectionScheme;
