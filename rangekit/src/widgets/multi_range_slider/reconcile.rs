//! Merging a changed handle value back into the keyed mapping.
//!
//! Keys are bound to *rank*, not to a handle: the i-th declared key always
//! receives the i-th smallest value. Dragging a handle past a neighbor
//! therefore swaps which key each of the two positions represents.

use super::values::SliderValues;

pub use crate::utils::numeric::arrays_equal;

/// Replace the value at `changed_index` with `new_value` and re-sort.
///
/// An index past the end appends `new_value`.
pub fn reconcile(sorted_values: &[f64], changed_index: usize, new_value: f64) -> Vec<f64> {
    let split = changed_index.min(sorted_values.len());
    let mut values = Vec::with_capacity(sorted_values.len() + 1);
    values.extend_from_slice(&sorted_values[..split]);
    values.push(new_value);
    if let Some(rest) = sorted_values.get(changed_index.saturating_add(1)..) {
        values.extend_from_slice(rest);
    }
    values.sort_by(f64::total_cmp);
    values
}

/// Bind sorted values to keys positionally, in declared key order.
///
/// Keys beyond the number of values are left out.
pub fn apply_to_keyed_mapping<'a>(
    declared_keys: impl IntoIterator<Item = &'a str>,
    sorted_values: &[f64],
) -> SliderValues {
    declared_keys
        .into_iter()
        .zip(sorted_values.iter().copied())
        .collect()
}
