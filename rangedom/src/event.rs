/// High-level input events with element targeting
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button or touch pressed
    PointerDown(PointerEvent),
    /// Pointer moved (mouse move or touch move)
    PointerMove(PointerEvent),
    /// Mouse button released or touch ended
    PointerUp(PointerEvent),
    /// Pointer left the tracked area or the gesture was aborted
    PointerCancel(PointerEvent),
    /// Key press, targeted at the focused element
    KeyDown {
        target: Option<String>,
        key: Key,
    },
    /// Key release, targeted at the focused element
    KeyUp {
        target: Option<String>,
        key: Key,
    },
}

/// Source device of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// A mouse or touch event in client (viewport) coordinates.
///
/// For touch events the coordinates are those of the first changed touch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    pub target: Option<String>,
    pub kind: PointerKind,
    pub button: PointerButton,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            client_x,
            client_y,
            ..Default::default()
        }
    }

    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self {
            kind: PointerKind::Touch,
            client_x,
            client_y,
            ..Default::default()
        }
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Coordinate along the slider axis: `client_y` when vertical, else `client_x`.
    pub fn client_offset(&self, vertical: bool) -> f64 {
        if vertical {
            self.client_y
        } else {
            self.client_x
        }
    }
}

/// Arrow keys, the only keys delivered to handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}
