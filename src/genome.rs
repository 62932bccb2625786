//! # Genomes and populations
//!
//! A genome is an ordered, fixed-length sequence of genes. The gene type is a
//! free type parameter: real-valued genes for numeric problems, `char` for the
//! string-matching demo, anything `Clone` for categorical encodings. Only the
//! numeric mutation operators pin the gene type to `f64`.
//!
//! A population is an ordered sequence of genomes. Its index positions are
//! aligned with a parallel fitness slice for the duration of one generation:
//! `fitness[i]` scores `population[i]`, and higher is better.
//!
//! ```rust
//! use genetools::genome::{check_aligned, Genome, Population};
//!
//! let population: Population<f64> = vec![vec![0.1, 0.2], vec![0.3, 0.4]];
//! let fitness = vec![0.3, 0.7];
//! assert!(check_aligned(&population, &fitness).is_ok());
//!
//! let best: &Genome<f64> = &population[1];
//! assert_eq!(best.len(), 2);
//! ```

use crate::error::{GeneticError, Result};

/// An ordered, fixed-length sequence of genes.
pub type Genome<G> = Vec<G>;

/// An ordered sequence of genomes, index-aligned with a fitness slice.
pub type Population<G> = Vec<Genome<G>>;

/// Checks the generation boundary invariants of a population and its fitness.
///
/// # Errors
///
/// - `EmptyPopulation` if the population is empty.
/// - `LengthMismatch` if the two slices differ in length.
/// - `InvalidNumericValue` if any fitness value is NaN or infinite.
pub fn check_aligned<G>(population: &[Genome<G>], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if population.len() != fitness.len() {
        return Err(GeneticError::LengthMismatch {
            population: population.len(),
            fitness: fitness.len(),
        });
    }

    if let Some((i, value)) = fitness.iter().enumerate().find(|(_, f)| !f.is_finite()) {
        return Err(GeneticError::InvalidNumericValue(format!(
            "Non-finite fitness score {} at index {}",
            value, i
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_population() {
        let population = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']];
        assert!(check_aligned(&population, &[1.0, 2.0, 0.0]).is_ok());
    }

    #[test]
    fn test_empty_population() {
        let population: Population<f64> = Vec::new();
        assert_eq!(
            check_aligned(&population, &[]),
            Err(GeneticError::EmptyPopulation)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let population = vec![vec![1.0], vec![2.0]];
        assert_eq!(
            check_aligned(&population, &[1.0]),
            Err(GeneticError::LengthMismatch {
                population: 2,
                fitness: 1
            })
        );
    }

    #[test]
    fn test_non_finite_fitness() {
        let population = vec![vec![1.0], vec![2.0]];
        let result = check_aligned(&population, &[1.0, f64::NAN]);
        assert!(matches!(result, Err(GeneticError::InvalidNumericValue(_))));
    }
}
