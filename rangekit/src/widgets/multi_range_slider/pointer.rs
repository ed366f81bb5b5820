//! Routing of track input to the nearest handle.

use crate::utils::numeric::arg_min;

/// A handle that can translate a screen coordinate into a domain value.
pub trait ValueHandle {
    /// Current value of the handle.
    fn value(&self) -> f64;

    /// Domain value at `client_pixel`, using this handle's own scale.
    fn client_to_value(&self, client_pixel: f64) -> f64;
}

/// Index of the handle closest to the pointer, or None without handles.
///
/// `client_offset` extracts the pointer coordinate for a given handle (mouse
/// and touch events carry it differently). Each handle converts that
/// coordinate to a value and is scored by the distance to its own value; the
/// first handle with the smallest distance wins.
pub fn nearest_handle<H: ValueHandle>(
    handles: &[H],
    client_offset: impl Fn(&H) -> f64,
) -> Option<usize> {
    let found = arg_min(handles, |handle| {
        let offset_value = handle.client_to_value(client_offset(handle));
        (offset_value - handle.value()).abs()
    });
    log::trace!("[slider] nearest handle {:?} of {}", found, handles.len());
    found
}
