//! # UniformCrossover
//!
//! Gene-by-gene recombination: at every position up to the shorter parent's
//! length the two parents' genes are swapped with a fixed probability.
use super::CrossoverOperator;
use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Uniform crossover with a per-gene swap probability (0.5 by default).
///
/// ```rust
/// use genetools::crossover::{CrossoverOperator, UniformCrossover};
/// use genetools::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::new();
/// let swap_all = UniformCrossover::new(1.0).unwrap();
/// let (a, b) = swap_all.crossover(&[1, 2, 3], &[4, 5, 6, 7], &mut rng).unwrap();
/// assert_eq!(a, vec![4, 5, 6]);
/// assert_eq!(b, vec![1, 2, 3]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniformCrossoverParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    probability: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniformCrossoverParams {
    probability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UniformCrossoverParams> for UniformCrossover {
    type Error = GeneticError;

    fn try_from(params: UniformCrossoverParams) -> Result<Self> {
        Self::new(params.probability)
    }
}

impl UniformCrossover {
    /// Creates a uniform crossover that swaps each gene with `probability`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must be in [0, 1], got {}",
                probability
            )));
        }
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Recombines the parents directly.
    ///
    /// Only the first `min(first.len(), second.len())` positions of each parent
    /// are overwritten; genes beyond that in the longer parent are kept. The
    /// caller hands over exclusive access to both genomes for the call.
    pub fn crossover_in_place<G>(
        &self,
        first: &mut [G],
        second: &mut [G],
        rng: &mut RandomNumberGenerator,
    ) {
        let size = first.len().min(second.len());
        for (a, b) in first[..size].iter_mut().zip(second[..size].iter_mut()) {
            if rng.uniform() < self.probability {
                std::mem::swap(a, b);
            }
        }
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self { probability: 0.5 }
    }
}

impl<G> CrossoverOperator<G> for UniformCrossover
where
    G: Clone,
{
    fn crossover(
        &self,
        first: &[G],
        second: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome<G>, Genome<G>)> {
        let size = first.len().min(second.len());
        let mut child1 = Vec::with_capacity(size);
        let mut child2 = Vec::with_capacity(size);

        for (a, b) in first.iter().zip(second.iter()) {
            if rng.uniform() < self.probability {
                child1.push(b.clone());
                child2.push(a.clone());
            } else {
                child1.push(a.clone());
                child2.push(b.clone());
            }
        }

        Ok((child1, child2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_probability_keeps_parents() {
        let mut rng = RandomNumberGenerator::new();
        let operator = UniformCrossover::new(0.0).unwrap();

        let (a, b) = operator
            .crossover(&[1.0, 2.0, 3.0, 9.0], &[4.0, 5.0, 6.0], &mut rng)
            .unwrap();

        assert_eq!(a, vec![1.0, 2.0, 3.0]);
        assert_eq!(b, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_full_probability_swaps_everything() {
        let mut rng = RandomNumberGenerator::new();
        let operator = UniformCrossover::new(1.0).unwrap();

        let (a, b) = operator
            .crossover(&['a', 'b', 'c'], &['x', 'y', 'z'], &mut rng)
            .unwrap();

        assert_eq!(a, vec!['x', 'y', 'z']);
        assert_eq!(b, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_children_mix_parent_genes_per_position() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let first = vec![0; 32];
        let second = vec![1; 32];

        let (a, b) = UniformCrossover::default()
            .crossover(&first, &second, &mut rng)
            .unwrap();

        for i in 0..32 {
            assert_eq!(a[i] + b[i], 1);
        }
    }

    #[test]
    fn test_in_place_preserves_tail() {
        let mut rng = RandomNumberGenerator::new();
        let operator = UniformCrossover::new(1.0).unwrap();
        let mut first = vec![1, 2, 3, 4, 5];
        let mut second = vec![6, 7, 8];

        operator.crossover_in_place(&mut first, &mut second, &mut rng);

        assert_eq!(first, vec![6, 7, 8, 4, 5]);
        assert_eq!(second, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_probability() {
        assert!(UniformCrossover::new(1.5).is_err());
        assert!(UniformCrossover::new(-0.1).is_err());
        assert!(UniformCrossover::new(f64::NAN).is_err());
        assert_eq!(UniformCrossover::default().probability(), 0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_probability() {
        let crossover: UniformCrossover = serde_json::from_str(r#"{"probability":0.3}"#).unwrap();
        assert_eq!(crossover.probability(), 0.3);

        assert!(serde_json::from_str::<UniformCrossover>(r#"{"probability":5.0}"#).is_err());
    }

    #[test]
    fn test_empty_parents() {
        let mut rng = RandomNumberGenerator::new();
        let (a, b) = UniformCrossover::default()
            .crossover(&[] as &[u8], &[1, 2], &mut rng)
            .unwrap();

        assert!(a.is_empty());
        assert!(b.is_empty());
    }
}
