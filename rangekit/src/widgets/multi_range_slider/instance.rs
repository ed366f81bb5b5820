//! Live draggable handle instances.
//!
//! A [`HandleInstance`] is the persistent counterpart of a [`SliderHandle`]:
//! the slider keeps one per rendered rank and feeds it fresh props on every
//! render. Instances don't touch the value mapping themselves; they report
//! [`HandleSignal`]s that the slider reconciles.
//!
//! [`SliderHandle`]: super::handle::SliderHandle

use rangedom::{Key, PointerEvent};

use super::fill::offset_ratio;
use super::pointer::ValueHandle;
use crate::utils::numeric::{clamp, round_to_precision};

/// Drag state of a single handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// A pointer move arrived since the drag began.
        moved: bool,
    },
}

/// Screen placement of the slider track, in client pixels.
///
/// `x`/`y` is the top-left corner; `length` runs along the slider axis
/// (width when horizontal, height when vertical).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub x: f64,
    pub y: f64,
    pub length: f64,
}

impl TrackGeometry {
    pub fn new(x: f64, y: f64, length: f64) -> Self {
        Self { x, y, length }
    }
}

/// Props handed to an instance on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceProps {
    /// Rank of the handle among the sorted handles.
    pub index: usize,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step_size: f64,
    /// Decimal places new values are rounded to.
    pub precision: usize,
    pub tick_size_ratio: f64,
    pub vertical: bool,
    pub disabled: bool,
}

/// Value notification raised by a handle instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleSignal {
    /// Intermediate value while moving.
    Change(f64),
    /// Final value when an interaction completes.
    Release(f64),
}

#[derive(Debug, Clone)]
pub struct HandleInstance {
    element_id: String,
    props: InstanceProps,
    track: TrackGeometry,
    state: DragState,
}

impl HandleInstance {
    pub fn new(element_id: impl Into<String>, props: InstanceProps, track: TrackGeometry) -> Self {
        Self {
            element_id: element_id.into(),
            props,
            track,
            state: DragState::Idle,
        }
    }

    /// Apply props from a new render. Drag state survives.
    pub fn update(&mut self, props: InstanceProps, track: TrackGeometry) {
        self.props = props;
        self.track = track;
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Id of the label element rendered inside the handle.
    pub fn label_id(&self) -> String {
        format!("{}-label", self.element_id)
    }

    /// Whether `target` is the handle element or its label.
    pub fn owns_target(&self, target: &str) -> bool {
        target == self.element_id || target.strip_prefix(self.element_id.as_str()) == Some("-label")
    }

    pub fn index(&self) -> usize {
        self.props.index
    }

    pub fn props(&self) -> &InstanceProps {
        &self.props
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pixels per unit of value.
    pub fn tick_size(&self) -> f64 {
        self.track.length * self.props.tick_size_ratio
    }

    /// Normalized position of the handle on the track.
    pub fn offset_ratio(&self) -> f64 {
        offset_ratio(self.props.value, self.props.min, self.props.tick_size_ratio)
    }

    /// Client coordinate of the handle center along the slider axis.
    pub fn center_pixel(&self) -> f64 {
        let ratio = self.offset_ratio();
        if self.props.vertical {
            self.track.y + (1.0 - ratio) * self.track.length
        } else {
            self.track.x + ratio * self.track.length
        }
    }

    /// Pointer coordinate along the slider axis, for mouse and touch alike.
    pub fn client_offset(&self, event: &PointerEvent) -> f64 {
        event.client_offset(self.props.vertical)
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Start dragging from `event` and jump to the pointer's value.
    pub fn begin_movement(&mut self, event: &PointerEvent) -> Vec<HandleSignal> {
        if self.props.disabled {
            return Vec::new();
        }
        log::debug!(
            "[slider] handle {} drag start ({:?})",
            self.props.index,
            event.kind
        );
        self.state = DragState::Dragging { moved: false };
        let value = self.client_to_value(self.client_offset(event));
        self.change_value(value).into_iter().collect()
    }

    /// Follow a pointer move. Ignored unless dragging.
    pub fn move_to(&mut self, event: &PointerEvent) -> Option<HandleSignal> {
        if self.props.disabled || !self.is_moving() {
            return None;
        }
        self.state = DragState::Dragging { moved: true };
        let value = self.client_to_value(self.client_offset(event));
        log::trace!("[slider] handle {} moved to {}", self.props.index, value);
        self.change_value(value)
    }

    /// Finish the drag at `event`: last change, then release.
    pub fn end_movement(&mut self, event: &PointerEvent) -> Vec<HandleSignal> {
        if !self.is_moving() {
            return Vec::new();
        }
        self.state = DragState::Idle;
        let value = self.client_to_value(self.client_offset(event));
        let final_value = self.clamp_value(value);
        log::debug!(
            "[slider] handle {} drag end at {}",
            self.props.index,
            final_value
        );

        let mut signals: Vec<HandleSignal> = self.change_value(value).into_iter().collect();
        signals.push(HandleSignal::Release(final_value));
        signals
    }

    /// Abort the drag. Releases the current value only if the pointer moved.
    pub fn cancel_movement(&mut self) -> Option<HandleSignal> {
        let DragState::Dragging { moved } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        log::debug!(
            "[slider] handle {} drag cancelled (moved: {moved})",
            self.props.index
        );
        moved.then_some(HandleSignal::Release(self.props.value))
    }

    /// Arrow keys step the value down (left/down) or up (right/up).
    pub fn key_down(&mut self, key: Key) -> Option<HandleSignal> {
        if self.props.disabled {
            return None;
        }
        match key {
            Key::Down | Key::Left => self.change_value(self.props.value - self.props.step_size),
            Key::Up | Key::Right => self.change_value(self.props.value + self.props.step_size),
        }
    }

    /// Releasing an arrow key releases the current value.
    pub fn key_up(&mut self) -> Option<HandleSignal> {
        if self.props.disabled {
            return None;
        }
        Some(HandleSignal::Release(self.props.value))
    }

    fn clamp_value(&self, value: f64) -> f64 {
        let rounded = round_to_precision(value, self.props.precision);
        clamp(rounded, self.props.min, self.props.max)
    }

    /// Clamp and round `value`; signal only when it differs from the current value.
    fn change_value(&self, value: f64) -> Option<HandleSignal> {
        let value = self.clamp_value(value);
        if value.is_nan() || value == self.props.value {
            None
        } else {
            Some(HandleSignal::Change(value))
        }
    }
}

impl ValueHandle for HandleInstance {
    fn value(&self) -> f64 {
        self.props.value
    }

    /// Snap the pointer to the nearest step relative to the handle center.
    fn client_to_value(&self, client_pixel: f64) -> f64 {
        let center = self.center_pixel();
        // Vertical values grow upward while client y grows downward
        let pixel_delta = if self.props.vertical {
            center - client_pixel
        } else {
            client_pixel - center
        };
        let steps = pixel_delta / (self.tick_size() * self.props.step_size);
        if !steps.is_finite() {
            return self.props.value;
        }
        self.props.value + steps.round() * self.props.step_size
    }
}
