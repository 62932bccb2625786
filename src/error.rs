//! # Error Types
//!
//! This module defines the error type shared by every operator in the crate.
//! Operators never panic on bad input: requesting more individuals than are
//! available, feeding degenerate fitness into a proportional scheme or passing
//! out-of-range parameters all surface as a [`GeneticError`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetools::error::{GeneticError, Result};
//!
//! fn pick(fitness: &[f64]) -> Result<usize> {
//!     if fitness.is_empty() {
//!         return Err(GeneticError::EmptyPopulation);
//!     }
//!     Ok(0)
//! }
//!
//! assert!(pick(&[]).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genetools::error::{GeneticError, OptionExt};
//!
//! fn first_parent(parents: &[usize]) -> genetools::error::Result<usize> {
//!     parents.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while evolving a generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// More individuals were requested than the pool can provide without replacement.
    #[error("Invalid cardinality: requested {requested} but only {available} available")]
    InvalidCardinality { requested: usize, available: usize },

    /// Proportional selection was asked to work on negative or all-zero fitness.
    #[error("Degenerate fitness: {0}")]
    DegenerateFitness(String),

    /// The population and fitness sequences are not index-aligned.
    #[error(
        "Length mismatch: population has {population} individuals but fitness has {fitness} values"
    )]
    LengthMismatch { population: usize, fitness: usize },

    /// A genome is too short for the requested operator.
    #[error("Genome too short: {0}")]
    GenomeTooShort(String),

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic operators.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genetools::error::ResultExt;
/// use rand_distr::Normal;
///
/// let err = Normal::new(0.0, f64::NAN).context("Invalid Gaussian parameters");
/// assert!(err.is_err());
///
/// let ok = Normal::new(0.0, 1.0).context("Invalid Gaussian parameters");
/// assert!(ok.is_ok());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>` using `err_fn` for the `None` case.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
