//! Random-index utilities.
//!
//! Draw indices (or the elements they address) from a collection, with or
//! without replacement. Every container is a plain slice; there is no special
//! casing of the underlying storage.

use rand::seq::index;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Draws `amount` indices in `[0, len)`.
///
/// Without replacement the indices are distinct and come back in draw order.
/// With replacement any `amount` is allowed as long as there is something to
/// draw from.
///
/// # Errors
///
/// Returns `InvalidCardinality` if `amount > len` without replacement, or if
/// `len == 0` and `amount > 0` with replacement.
pub fn sample_indices(
    len: usize,
    amount: usize,
    replacement: bool,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<usize>> {
    if amount == 0 {
        return Ok(Vec::new());
    }

    if replacement {
        if len == 0 {
            return Err(GeneticError::InvalidCardinality {
                requested: amount,
                available: 0,
            });
        }
        return Ok((0..amount).map(|_| rng.index(len)).collect());
    }

    if amount > len {
        return Err(GeneticError::InvalidCardinality {
            requested: amount,
            available: len,
        });
    }

    Ok(index::sample(&mut rng.rng, len, amount).into_vec())
}

/// Draws `amount` elements of `items`, cloning them out.
///
/// # Errors
///
/// Same cardinality rules as [`sample_indices`].
pub fn choose<T: Clone>(
    items: &[T],
    amount: usize,
    replacement: bool,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<T>> {
    let indices = sample_indices(items.len(), amount, replacement, rng)?;
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}
