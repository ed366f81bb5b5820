//! Multi-range slider rendering.

use rangedom::{Element, InlineStyle, Length};

use super::fill::{Segment, compute_segments};
use super::handle::{HandleType, SliderHandle};
use super::instance::HandleInstance;
use super::{LabelRenderer, MultiRangeSlider};
use crate::classes;
use crate::utils::numeric::approx_eq;

/// Upper bound on axis labels, guards against tiny label steps.
const MAX_AXIS_LABELS: usize = 1000;

impl MultiRangeSlider {
    /// Render the slider and register its handle instances.
    ///
    /// Instances are matched to handles by rank: existing ones get fresh
    /// props, missing ranks are appended.
    pub fn render(&mut self) -> Element {
        let sorted = self.sorted_handles();
        self.register_handles(&sorted);

        let vertical = self.config.vertical;
        let root = Element::div()
            .id(&self.id)
            .class(classes::SLIDER)
            .class(classes::MULTI_RANGE_SLIDER)
            .class_if(self.config.disabled, classes::DISABLED)
            .class_if(
                matches!(self.label_renderer, LabelRenderer::Hidden),
                classes::SLIDER_UNLABELED,
            )
            .class_if(vertical, classes::VERTICAL)
            .clickable(!self.config.disabled)
            .disabled(self.config.disabled);

        root.child(self.render_track(&sorted))
            .child(self.render_axis())
            .children(self.render_handles(&sorted))
    }

    fn register_handles(&mut self, sorted: &[SliderHandle]) {
        for (index, handle) in sorted.iter().enumerate() {
            let props = self.instance_props(index, handle.value);
            match self.handles.get_mut(index) {
                Some(instance) => instance.update(props, self.track),
                None => {
                    let element_id = format!("{}-handle-{index}", self.id);
                    self.handles
                        .push(HandleInstance::new(element_id, props, self.track));
                }
            }
        }
    }

    fn render_track(&self, sorted: &[SliderHandle]) -> Element {
        let segments = compute_segments(
            sorted,
            self.config.min,
            self.config.max,
            self.tick_size_ratio(),
            self.config.default_track_intent,
        );

        Element::div()
            .id(format!("{}-track", self.id))
            .class(classes::SLIDER_TRACK)
            .children(segments.iter().map(|segment| self.render_segment(segment)))
    }

    fn render_segment(&self, segment: &Segment) -> Element {
        let mut element = Element::div()
            .id(format!("{}-{}", self.id, segment.key()))
            .key(segment.key())
            .style(segment.style(self.config.vertical))
            .data("intent", segment.intent.as_str());
        for class in segment.classes() {
            element = element.class(class);
        }
        element
    }

    /// Axis labels from min to max (inclusive) every `label_step_size`.
    fn render_axis(&self) -> Element {
        let axis = Element::div()
            .id(format!("{}-axis", self.id))
            .class(classes::SLIDER_AXIS);

        let (min, max) = (self.config.min, self.config.max);
        let label_step = self.config.label_step_size;
        let ratio_step = self.tick_size_ratio() * label_step;

        let mut labels = Vec::new();
        let mut value = min;
        let mut offset_ratio = 0.0;
        while (value < max || approx_eq(value, max)) && labels.len() < MAX_AXIS_LABELS {
            let mut label = Element::div()
                .key(value.to_string())
                .class(classes::SLIDER_LABEL)
                .style(self.axis_style(offset_ratio));
            if let Some(text) = self.format_label(value) {
                label = label.child(Element::text(text));
            }
            labels.push(label);

            value += label_step;
            offset_ratio += ratio_step;
        }

        axis.children(labels)
    }

    fn axis_style(&self, offset_ratio: f64) -> InlineStyle {
        let offset = Length::ratio(offset_ratio);
        if self.config.vertical {
            InlineStyle::new().bottom(offset)
        } else {
            InlineStyle::new().left(offset)
        }
    }

    fn render_handles(&self, sorted: &[SliderHandle]) -> Vec<Element> {
        let count = sorted.len();
        sorted
            .iter()
            .zip(&self.handles)
            .map(|(handle, instance)| {
                let offset = Length::ratio(instance.offset_ratio());
                let mut element = Element::span()
                    .id(instance.element_id())
                    .key(format!("{}-{count}", instance.index()))
                    .class(classes::SLIDER_HANDLE)
                    .class_if(instance.is_moving(), classes::ACTIVE)
                    .class_if(handle.handle_type == HandleType::Start, classes::START)
                    .class_if(handle.handle_type == HandleType::End, classes::END)
                    .data("handle", handle.key.as_str())
                    .draggable(!self.config.disabled)
                    .focusable(true)
                    .disabled(self.config.disabled);

                element = if self.config.vertical {
                    element.bottom(offset)
                } else {
                    element.left(offset)
                };

                if let Some(text) = self.format_label(handle.value) {
                    element = element.child(
                        Element::text(text)
                            .id(instance.label_id())
                            .class(classes::SLIDER_LABEL),
                    );
                }
                element
            })
            .collect()
    }
}
