use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::sampling::{choose, sample_indices};
use crate::selection::selection_strategy::SelectionStrategy;

/// Uniform random selection, ignoring fitness.
///
/// Without replacement every index is returned at most once and at most
/// `fitness.len()` indices can be requested. With replacement any number can
/// be drawn.
///
/// # Examples
///
/// ```
/// use genetools::selection::{RandomSelection, SelectionStrategy};
/// use genetools::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let picked = RandomSelection::new(true).choose(&["x", "y"], 6, &mut rng).unwrap();
/// assert_eq!(picked.len(), 6);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelection {
    replacement: bool,
}

impl RandomSelection {
    /// Creates a uniform selection with the given replacement policy.
    pub fn new(replacement: bool) -> Self {
        Self { replacement }
    }

    pub fn with_replacement(mut self) -> Self {
        self.replacement = true;
        self
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    /// Draws `num_to_select` elements of `items` uniformly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCardinality` if more items are requested than exist and
    /// replacement is off.
    pub fn choose<T: Clone>(
        &self,
        items: &[T],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>> {
        choose(items, num_to_select, self.replacement, rng)
    }
}

impl SelectionStrategy for RandomSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        sample_indices(fitness.len(), num_to_select, self.replacement, rng)
    }
}
