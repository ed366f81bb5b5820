//! Multi-handle range slider.
//!
//! The slider renders one handle per key of a [`SliderValues`] mapping,
//! fills the track between handles according to their intents, and routes
//! pointer input on the track to the nearest handle.
//!
//! # Data flow
//!
//! ```text
//! SliderValues ──► derive_handles ──► sort_by_value ──┬─► compute_segments (render)
//!                                                     └─► HandleInstance (input)
//!                                                              │
//!          on_change / on_release ◄── apply_to_keyed_mapping ◄─┘ reconcile
//! ```
//!
//! Keys are bound to rank: after a drag the i-th declared key receives the
//! i-th smallest value.
//!
//! # Example
//!
//! ```
//! use rangekit::prelude::*;
//!
//! let values = SliderValues::new().with("low", 20.0).with("high", 80.0);
//! let mut slider = MultiRangeSlider::new(SliderConfig::new(0.0, 100.0), values)
//!     .unwrap()
//!     .on_change(|values| println!("{values:?}"));
//!
//! slider.layout(TrackGeometry::new(0.0, 0.0, 100.0));
//! let tree = slider.render();
//! assert!(tree.has_class("pt-multi-range-slider"));
//! ```

mod events;
pub mod fill;
pub mod handle;
pub mod instance;
pub mod pointer;
pub mod reconcile;
mod render;
pub mod values;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use fill::{Segment, compute_segments};
pub use handle::{
    HandleProps, HandlePropsResolver, HandleType, SliderHandle, derive_handles, sort_by_value,
};
pub use instance::{DragState, HandleInstance, HandleSignal, InstanceProps, TrackGeometry};
pub use pointer::{ValueHandle, nearest_handle};
pub use reconcile::{apply_to_keyed_mapping, arrays_equal, reconcile};
pub use values::SliderValues;

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::utils::numeric::{decimal_precision, format_fixed};

/// Callback receiving a full keyed mapping.
pub type ValuesCallback = Box<dyn FnMut(&SliderValues)>;

/// Generate a unique auto-incremented slider ID
fn generate_auto_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("__slider_{id}")
}

/// How handle and axis labels are displayed.
#[derive(Default)]
pub enum LabelRenderer {
    /// Value formatted with the configured label precision.
    #[default]
    Default,
    /// No labels; the slider gets the unlabeled class.
    Hidden,
    /// Custom formatting.
    Custom(Box<dyn Fn(f64) -> String>),
}

impl fmt::Debug for LabelRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Hidden => write!(f, "Hidden"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// A slider with any number of handles over a numeric domain.
pub struct MultiRangeSlider {
    /// Unique identifier, prefix of all element ids
    id: String,
    config: SliderConfig,
    values: SliderValues,
    handle_props: Option<Box<HandlePropsResolver>>,
    label_renderer: LabelRenderer,
    on_change: Option<ValuesCallback>,
    on_release: Option<ValuesCallback>,
    track: TrackGeometry,
    /// Live handle instances, indexed by rank. Appended on first render of
    /// a rank, cleared whenever the number of keys changes.
    handles: Vec<HandleInstance>,
}

impl fmt::Debug for MultiRangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiRangeSlider")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("values", &self.values)
            .field("label_renderer", &self.label_renderer)
            .field("track", &self.track)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}

impl MultiRangeSlider {
    /// Create a slider; fails if `config` is unusable.
    pub fn new(config: SliderConfig, values: SliderValues) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id: generate_auto_id(),
            config,
            values,
            handle_props: None,
            label_renderer: LabelRenderer::Default,
            on_change: None,
            on_release: None,
            track: TrackGeometry::default(),
            handles: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the id used as prefix for rendered element ids.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Resolve per-key handle type and track intents.
    pub fn handle_props(mut self, resolver: impl Fn(&str) -> HandleProps + 'static) -> Self {
        self.handle_props = Some(Box::new(resolver));
        self
    }

    pub fn label_renderer(mut self, renderer: LabelRenderer) -> Self {
        self.label_renderer = renderer;
        self
    }

    /// Called with the reconciled mapping on every intermediate change.
    pub fn on_change(mut self, callback: impl FnMut(&SliderValues) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Called with the reconciled mapping when an interaction completes.
    pub fn on_release(mut self, callback: impl FnMut(&SliderValues) + 'static) -> Self {
        self.on_release = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id_string(&self) -> String {
        self.id.clone()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn values(&self) -> &SliderValues {
        &self.values
    }

    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    /// Live handle instances in rank order.
    pub fn handle_instances(&self) -> &[HandleInstance] {
        &self.handles
    }

    /// Whether any handle is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.handles.iter().any(HandleInstance::is_moving)
    }

    /// Domain-value to normalized-offset conversion factor.
    pub fn tick_size_ratio(&self) -> f64 {
        self.config.tick_size_ratio()
    }

    /// Pixels per unit of value on the current track.
    pub fn tick_size(&self) -> f64 {
        self.track.length * self.tick_size_ratio()
    }

    /// Handles for the current values, ascending by value.
    pub fn sorted_handles(&self) -> Vec<SliderHandle> {
        handle::sorted_handles(&self.values, self.handle_props.as_deref())
    }

    /// Current values, ascending.
    pub fn sorted_values(&self) -> Vec<f64> {
        self.values.sorted_values()
    }

    /// Label text for `value`, or None when labels are hidden.
    pub fn format_label(&self, value: f64) -> Option<String> {
        match &self.label_renderer {
            LabelRenderer::Default => {
                Some(format_fixed(value, self.config.effective_label_precision()))
            }
            LabelRenderer::Hidden => None,
            LabelRenderer::Custom(format) => Some(format(value)),
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value mapping.
    ///
    /// A different number of keys drops every live handle instance, including
    /// one being dragged; the next render re-creates them.
    pub fn set_values(&mut self, values: SliderValues) {
        if values.len() != self.values.len() {
            log::debug!(
                "[slider] {} handle count {} -> {}, resetting handles",
                self.id,
                self.values.len(),
                values.len()
            );
            self.handles.clear();
        }
        self.values = values;
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Record where the host laid the track out.
    pub fn layout(&mut self, track: TrackGeometry) {
        self.track = track;
    }

    // -------------------------------------------------------------------------
    // Value emission
    // -------------------------------------------------------------------------

    fn instance_props(&self, index: usize, value: f64) -> InstanceProps {
        InstanceProps {
            index,
            value,
            min: self.config.min,
            max: self.config.max,
            step_size: self.config.step_size,
            precision: decimal_precision(self.config.step_size),
            tick_size_ratio: self.tick_size_ratio(),
            vertical: self.config.vertical,
            disabled: self.config.disabled,
        }
    }

    /// Reconcile a handle signal into the mapping and notify the owner.
    fn emit(&mut self, index: usize, signal: HandleSignal) {
        let old_values = self.sorted_values();
        match signal {
            HandleSignal::Change(value) => {
                let new_values = reconcile(&old_values, index, value);
                if arrays_equal(&new_values, &old_values) {
                    return;
                }
                if let Some(callback) = self.on_change.as_mut() {
                    let mapping = apply_to_keyed_mapping(self.values.keys(), &new_values);
                    callback(&mapping);
                }
            }
            HandleSignal::Release(value) => {
                let new_values = reconcile(&old_values, index, value);
                if let Some(callback) = self.on_release.as_mut() {
                    let mapping = apply_to_keyed_mapping(self.values.keys(), &new_values);
                    callback(&mapping);
                }
            }
        }
    }

    fn emit_all(&mut self, index: usize, signals: impl IntoIterator<Item = HandleSignal>) {
        for signal in signals {
            self.emit(index, signal);
        }
    }
}
