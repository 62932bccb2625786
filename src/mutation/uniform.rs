use super::{check_probability, MutationStrategy};
use crate::{
    error::{GeneticError, Result},
    ranking::map_to_interval,
    rng::RandomNumberGenerator,
};

/// Replaces genes with fresh uniform values from `[range_min, range_max)`.
///
/// Each gene is replaced independently with the configured probability.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniformParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMutation {
    probability: f64,
    range_min: f64,
    range_max: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniformParams {
    probability: f64,
    range_min: f64,
    range_max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UniformParams> for UniformMutation {
    type Error = GeneticError;

    fn try_from(params: UniformParams) -> Result<Self> {
        Self::new(params.probability, params.range_min, params.range_max)
    }
}

impl UniformMutation {
    /// # Errors
    ///
    /// Fails if `probability` is outside `[0, 1]` or the range is empty,
    /// inverted or not finite.
    pub fn new(probability: f64, range_min: f64, range_max: f64) -> Result<Self> {
        if !range_min.is_finite() || !range_max.is_finite() || range_min >= range_max {
            return Err(GeneticError::Configuration(format!(
                "Uniform mutation needs a finite range with min < max, got [{}, {})",
                range_min, range_max
            )));
        }

        Ok(Self {
            probability: check_probability(probability)?,
            range_min,
            range_max,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

impl MutationStrategy<f64> for UniformMutation {
    fn mutate(&self, genome: &mut [f64], rng: &mut RandomNumberGenerator) -> Result<()> {
        for gene in genome.iter_mut() {
            if rng.uniform() < self.probability {
                *gene = map_to_interval(rng.uniform(), (0.0, 1.0), self.range())?;
            }
        }
        Ok(())
    }
}
