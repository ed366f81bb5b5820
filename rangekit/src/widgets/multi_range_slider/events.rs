//! Event handling for the MultiRangeSlider widget.

use rangedom::{Event, Key, PointerButton, PointerEvent};

use super::MultiRangeSlider;
use super::pointer::nearest_handle;
use crate::events::EventResult;

impl MultiRangeSlider {
    /// Dispatch an input event to the slider.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::PointerDown(pointer) => self.handle_pointer_down(pointer),
            Event::PointerMove(pointer) => self.handle_pointer_move(pointer),
            Event::PointerUp(pointer) => self.handle_pointer_up(pointer),
            Event::PointerCancel(_) => self.handle_pointer_cancel(),
            Event::KeyDown { target, key } => self.handle_key_down(target.as_deref(), *key),
            Event::KeyUp { target, .. } => self.handle_key_up(target.as_deref()),
        }
    }

    /// Start a drag.
    ///
    /// A press on a handle drags that handle; a press elsewhere on the track
    /// drags the nearest handle. A secondary button press during a drag
    /// cancels it; another primary press during a drag is swallowed.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> EventResult {
        if event.button != PointerButton::Primary {
            return self.handle_pointer_cancel();
        }
        if self.config.disabled {
            return EventResult::Ignored;
        }
        if let Some(index) = self.dragging_index() {
            log::debug!(
                "[slider] {} ignoring press while handle {index} is dragged",
                self.id
            );
            return EventResult::Consumed;
        }

        let on_handle = event
            .target
            .as_deref()
            .and_then(|target| self.handles.iter().position(|h| h.owns_target(target)));

        let index = match on_handle {
            Some(index) => index,
            None => {
                let Some(index) =
                    nearest_handle(&self.handles, |handle| handle.client_offset(event))
                else {
                    return EventResult::Ignored;
                };
                index
            }
        };

        let signals = self.handles[index].begin_movement(event);
        let rank = self.handles[index].index();
        self.emit_all(rank, signals);
        EventResult::StartDrag
    }

    /// Move the dragged handle, if any.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> EventResult {
        let Some(index) = self.dragging_index() else {
            return EventResult::Ignored;
        };
        if let Some(signal) = self.handles[index].move_to(event) {
            let rank = self.handles[index].index();
            self.emit(rank, signal);
        }
        EventResult::Consumed
    }

    /// Finish the drag with a final change and a release.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> EventResult {
        let Some(index) = self.dragging_index() else {
            return EventResult::Ignored;
        };
        let signals = self.handles[index].end_movement(event);
        let rank = self.handles[index].index();
        self.emit_all(rank, signals);
        EventResult::Consumed
    }

    /// Abort the drag; releases only if the pointer had moved.
    pub fn handle_pointer_cancel(&mut self) -> EventResult {
        let Some(index) = self.dragging_index() else {
            return EventResult::Ignored;
        };
        if let Some(signal) = self.handles[index].cancel_movement() {
            let rank = self.handles[index].index();
            self.emit(rank, signal);
        }
        EventResult::Consumed
    }

    /// Arrow keys on a focused handle step its value.
    pub fn handle_key_down(&mut self, target: Option<&str>, key: Key) -> EventResult {
        if self.config.disabled {
            return EventResult::Ignored;
        }
        let Some(index) = self.target_index(target) else {
            return EventResult::Ignored;
        };
        if let Some(signal) = self.handles[index].key_down(key) {
            let rank = self.handles[index].index();
            self.emit(rank, signal);
        }
        EventResult::Consumed
    }

    /// Releasing an arrow key on a focused handle releases its value.
    pub fn handle_key_up(&mut self, target: Option<&str>) -> EventResult {
        let Some(index) = self.target_index(target) else {
            return EventResult::Ignored;
        };
        match self.handles[index].key_up() {
            Some(signal) => {
                let rank = self.handles[index].index();
                self.emit(rank, signal);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn dragging_index(&self) -> Option<usize> {
        self.handles.iter().position(|h| h.is_moving())
    }

    fn target_index(&self, target: Option<&str>) -> Option<usize> {
        let target = target?;
        self.handles.iter().position(|h| h.owns_target(target))
    }
}
