//! Handle derivation and ordering.

use serde::{Deserialize, Serialize};

use super::values::SliderValues;
use crate::intent::Intent;

/// How a handle relates to the fill on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleType {
    #[default]
    Full,
    /// Opens a range; the fill after it gets the start styling hook.
    Start,
    /// Closes a range; the fill before it gets the end styling hook.
    End,
}

/// Per-key display properties supplied by the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleProps {
    pub handle_type: HandleType,
    pub track_intent_before: Option<Intent>,
    pub track_intent_after: Option<Intent>,
}

impl HandleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start() -> Self {
        Self::new().handle_type(HandleType::Start)
    }

    pub fn end() -> Self {
        Self::new().handle_type(HandleType::End)
    }

    pub fn handle_type(mut self, handle_type: HandleType) -> Self {
        self.handle_type = handle_type;
        self
    }

    pub fn intent_before(mut self, intent: Intent) -> Self {
        self.track_intent_before = Some(intent);
        self
    }

    pub fn intent_after(mut self, intent: Intent) -> Self {
        self.track_intent_after = Some(intent);
        self
    }
}

/// Resolves display properties for a value key.
pub type HandlePropsResolver = dyn Fn(&str) -> HandleProps;

/// One handle, derived from a key of the value mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderHandle {
    pub key: String,
    pub value: f64,
    pub handle_type: HandleType,
    pub track_intent_before: Option<Intent>,
    pub track_intent_after: Option<Intent>,
}

impl SliderHandle {
    pub fn new(key: impl Into<String>, value: f64, props: HandleProps) -> Self {
        Self {
            key: key.into(),
            value,
            handle_type: props.handle_type,
            track_intent_before: props.track_intent_before,
            track_intent_after: props.track_intent_after,
        }
    }
}

/// Build one handle per key, in declared key order.
///
/// Without a resolver every handle is a plain `Full` handle with no track
/// intents. The output is unsorted.
pub fn derive_handles(
    values: &SliderValues,
    resolver: Option<&HandlePropsResolver>,
) -> Vec<SliderHandle> {
    values
        .iter()
        .map(|(key, value)| {
            let props = resolver.map(|resolve| resolve(key)).unwrap_or_default();
            SliderHandle::new(key, value, props)
        })
        .collect()
}

/// Sort handles ascending by value. Equal values keep their input order.
pub fn sort_by_value(mut handles: Vec<SliderHandle>) -> Vec<SliderHandle> {
    // `sort_by` is stable
    handles.sort_by(|left, right| left.value.total_cmp(&right.value));
    handles
}

/// Derive and sort in one step.
pub fn sorted_handles(
    values: &SliderValues,
    resolver: Option<&HandlePropsResolver>,
) -> Vec<SliderHandle> {
    sort_by_value(derive_handles(values, resolver))
}
