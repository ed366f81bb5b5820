//! Fill segments between adjacent handles.
//!
//! The track is split at every handle value, plus the two domain bounds.
//! Each non-empty piece becomes a [`Segment`] whose intent is picked by
//! priority from the handles on either side of it.

use rangedom::{InlineStyle, Length};

use super::handle::{HandleType, SliderHandle};
use crate::classes;
use crate::intent::Intent;
use crate::utils::numeric::clamp;
use crate::utils::priority::first_present_or;

/// A split point of the track: a real handle or a domain bound.
#[derive(Debug, Clone, Copy)]
struct TrackStop {
    value: f64,
    handle_type: Option<HandleType>,
    intent_before: Option<Intent>,
    intent_after: Option<Intent>,
}

impl TrackStop {
    fn boundary(value: f64) -> Self {
        Self {
            value,
            handle_type: None,
            intent_before: None,
            intent_after: None,
        }
    }
}

impl From<&SliderHandle> for TrackStop {
    fn from(handle: &SliderHandle) -> Self {
        Self {
            value: handle.value,
            handle_type: Some(handle.handle_type),
            intent_before: handle.track_intent_before,
            intent_after: handle.track_intent_after,
        }
    }
}

/// A filled region of the track between two adjacent stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position of the stop pair, stable across renders (`track-{index}`).
    pub index: usize,
    pub start_value: f64,
    pub end_value: f64,
    pub intent: Intent,
    /// Normalized offset of the start edge, in `[0, 1]`.
    pub start_ratio: f64,
    /// Normalized offset of the end edge, in `[0, 1]`.
    pub end_ratio: f64,
    /// The stop before this segment is a start-type handle.
    pub after_start_handle: bool,
    /// The stop after this segment is an end-type handle.
    pub before_end_handle: bool,
}

impl Segment {
    /// Rendered with the empty (unfilled) look.
    pub fn is_empty(&self) -> bool {
        self.intent.is_none()
    }

    pub fn key(&self) -> String {
        format!("track-{}", self.index)
    }

    /// Percentage span along the track axis.
    pub fn style(&self, vertical: bool) -> InlineStyle {
        let start = Length::ratio(self.start_ratio);
        let end = Length::ratio(1.0 - self.end_ratio);
        if vertical {
            InlineStyle::new().bottom(start).top(end).left(Length::ZERO)
        } else {
            InlineStyle::new().left(start).right(end).top(Length::ZERO)
        }
    }

    /// Class list: progress, intent, boundary hooks, empty marker.
    pub fn classes(&self) -> Vec<String> {
        let mut out = vec![classes::SLIDER_PROGRESS.to_string()];
        if let Some(intent) = self.intent.class() {
            out.push(intent);
        }
        if self.after_start_handle {
            out.push(classes::START.to_string());
        }
        if self.before_end_handle {
            out.push(classes::END.to_string());
        }
        if self.is_empty() {
            out.push(classes::SLIDER_PROGRESS_EMPTY.to_string());
        }
        out
    }
}

/// Normalized offset of `value`: `clamp((value - min) * tick_size_ratio, 0, 1)`.
pub fn offset_ratio(value: f64, min: f64, tick_size_ratio: f64) -> f64 {
    clamp((value - min) * tick_size_ratio, 0.0, 1.0)
}

/// Compute fill segments for handles already sorted by value.
///
/// Pairs with equal values produce no segment. Segment intent is the left
/// stop's `track_intent_after`, else the right stop's `track_intent_before`,
/// else `default_intent`.
pub fn compute_segments(
    sorted_handles: &[SliderHandle],
    min: f64,
    max: f64,
    tick_size_ratio: f64,
    default_intent: Intent,
) -> Vec<Segment> {
    let stops: Vec<TrackStop> = std::iter::once(TrackStop::boundary(min))
        .chain(sorted_handles.iter().map(TrackStop::from))
        .chain(std::iter::once(TrackStop::boundary(max)))
        .collect();

    stops
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let (left, right) = (pair[0], pair[1]);
            if left.value == right.value {
                return None;
            }

            let intent = first_present_or([left.intent_after, right.intent_before], default_intent);

            let mut start_ratio = offset_ratio(left.value, min, tick_size_ratio);
            let mut end_ratio = offset_ratio(right.value, min, tick_size_ratio);
            if start_ratio > end_ratio {
                std::mem::swap(&mut start_ratio, &mut end_ratio);
            }

            Some(Segment {
                index,
                start_value: left.value,
                end_value: right.value,
                intent,
                start_ratio,
                end_ratio,
                after_start_handle: left.handle_type == Some(HandleType::Start),
                before_end_handle: right.handle_type == Some(HandleType::End),
            })
        })
        .collect()
}
