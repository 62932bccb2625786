//! Sorting and interval helpers.
//!
//! [`sort_lists`] co-sorts a value sequence with a payload sequence. The
//! ascending order is a stable sort on the values; the descending order is the
//! exact reverse of it, so for tied values the later payload comes first. This
//! makes best-k and worst-k rankings mirror images of each other.

use crate::error::{GeneticError, Result};

/// Returns the positions of `values` in sorted order.
pub fn argsort(values: &[f64], descending: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    if descending {
        order.reverse();
    }
    order
}

/// Sorts `values` and carries each element of `payload` along with its value.
///
/// Pairs are formed positionally; when the slices differ in length the extra
/// tail of the longer one is ignored.
///
/// ```rust
/// use genetools::ranking::sort_lists;
///
/// let (values, names) = sort_lists(&[0.2, 0.9, 0.5], &["a", "b", "c"], true);
/// assert_eq!(values, vec![0.9, 0.5, 0.2]);
/// assert_eq!(names, vec!["b", "c", "a"]);
/// ```
pub fn sort_lists<T: Clone>(values: &[f64], payload: &[T], descending: bool) -> (Vec<f64>, Vec<T>) {
    let len = values.len().min(payload.len());
    argsort(&values[..len], descending)
        .into_iter()
        .map(|i| (values[i], payload[i].clone()))
        .unzip()
}

/// Returns the distinct elements of `items` that do not occur in `exclude`,
/// keeping the order of first appearance in `items`.
pub fn difference<T: PartialEq + Clone>(items: &[T], exclude: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !exclude.contains(item) && !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Maps `t` from the interval `old_range` onto `new_range` with an affine map.
///
/// # Errors
///
/// Returns `Configuration` if `old_range` has zero or non-finite length.
pub fn map_to_interval(t: f64, old_range: (f64, f64), new_range: (f64, f64)) -> Result<f64> {
    let width = old_range.1 - old_range.0;
    if width == 0.0 || !width.is_finite() {
        return Err(GeneticError::Configuration(format!(
            "Cannot map from the empty interval [{}, {}]",
            old_range.0, old_range.1
        )));
    }
    Ok(new_range.0 + (new_range.1 - new_range.0) / width * (t - old_range.0))
}
