//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunable rates of one generation
//! transition: how often genes are swapped during uniform crossover and which
//! share of the previous generation survives unchanged through elitism.
//!
//! ## Example
//!
//! ```rust
//! use genetools::evolution::options::EvolutionOptions;
//!
//! // Crossover probability 0.5 and elitism rate 0.05
//! let default_options = EvolutionOptions::default();
//!
//! // Custom rates, validated on construction
//! let custom_options = EvolutionOptions::new(0.7, 0.1).unwrap();
//! assert_eq!(custom_options.crossover_probability(), 0.7);
//! ```
//!
//! ## Fields
//!
//! - `crossover_probability`: Per-gene swap probability of the uniform crossover used while
//!   breeding.
//! - `elitism_rate`: Fraction of the population, rounded half to even, copied verbatim from
//!   the best individuals of the previous generation.
use crate::error::{GeneticError, Result};

pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.5;
pub const DEFAULT_ELITISM_RATE: f64 = 0.05;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "OptionsParams"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionOptions {
    crossover_probability: f64,
    elitism_rate: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OptionsParams {
    crossover_probability: f64,
    elitism_rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<OptionsParams> for EvolutionOptions {
    type Error = GeneticError;

    fn try_from(params: OptionsParams) -> Result<Self> {
        Self::new(params.crossover_probability, params.elitism_rate)
    }
}

impl EvolutionOptions {
    /// Creates options with the given rates.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if either rate lies outside `[0, 1]`.
    pub fn new(crossover_probability: f64, elitism_rate: f64) -> Result<Self> {
        Ok(Self {
            crossover_probability: check_rate("Crossover probability", crossover_probability)?,
            elitism_rate: check_rate("Elitism rate", elitism_rate)?,
        })
    }

    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    /// Sets the crossover probability.
    pub fn set_crossover_probability(&mut self, probability: f64) -> Result<()> {
        self.crossover_probability = check_rate("Crossover probability", probability)?;
        Ok(())
    }

    /// Sets the elitism rate.
    pub fn set_elitism_rate(&mut self, rate: f64) -> Result<()> {
        self.elitism_rate = check_rate("Elitism rate", rate)?;
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genetools::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .crossover_probability(0.6)
    ///     .elitism_rate(0.1)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(options.elitism_rate(), 0.1);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            elitism_rate: DEFAULT_ELITISM_RATE,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to their defaults. Ranges are checked in `build`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    crossover_probability: Option<f64>,
    elitism_rate: Option<f64>,
}

impl EvolutionOptionsBuilder {
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn elitism_rate(mut self, value: f64) -> Self {
        self.elitism_rate = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        EvolutionOptions::new(
            self.crossover_probability
                .unwrap_or(DEFAULT_CROSSOVER_PROBABILITY),
            self.elitism_rate.unwrap_or(DEFAULT_ELITISM_RATE),
        )
    }
}

fn check_rate(name: &str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EvolutionOptions::default();
        assert_eq!(options.crossover_probability(), 0.5);
        assert_eq!(options.elitism_rate(), 0.05);
    }

    #[test]
    fn test_builder_uses_defaults() {
        let options = EvolutionOptions::builder().elitism_rate(0.2).build().unwrap();
        assert_eq!(options.crossover_probability(), DEFAULT_CROSSOVER_PROBABILITY);
        assert_eq!(options.elitism_rate(), 0.2);
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        let result = EvolutionOptions::builder().crossover_probability(1.5).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionOptions::builder().elitism_rate(f64::NAN).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_setters_validate() {
        let mut options = EvolutionOptions::default();
        assert!(options.set_elitism_rate(-0.1).is_err());
        assert_eq!(options.elitism_rate(), DEFAULT_ELITISM_RATE);

        options.set_crossover_probability(1.0).unwrap();
        assert_eq!(options.crossover_probability(), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_rates() {
        let json = r#"{"crossover_probability":0.7,"elitism_rate":0.1}"#;
        let options: EvolutionOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options, EvolutionOptions::new(0.7, 0.1).unwrap());

        let json = r#"{"crossover_probability":0.7,"elitism_rate":1.5}"#;
        assert!(serde_json::from_str::<EvolutionOptions>(json).is_err());
    }
}
