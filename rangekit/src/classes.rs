//! CSS class names emitted by the widgets.

pub const NS: &str = "pt";

pub const ACTIVE: &str = "pt-active";
pub const DISABLED: &str = "pt-disabled";
pub const VERTICAL: &str = "pt-vertical";
pub const START: &str = "pt-start";
pub const END: &str = "pt-end";

pub const SLIDER: &str = "pt-slider";
pub const MULTI_RANGE_SLIDER: &str = "pt-multi-range-slider";
pub const SLIDER_AXIS: &str = "pt-slider-axis";
pub const SLIDER_HANDLE: &str = "pt-slider-handle";
pub const SLIDER_LABEL: &str = "pt-slider-label";
pub const SLIDER_PROGRESS: &str = "pt-slider-progress";
pub const SLIDER_PROGRESS_EMPTY: &str = "pt-slider-progress-empty";
pub const SLIDER_TRACK: &str = "pt-slider-track";
pub const SLIDER_UNLABELED: &str = "pt-slider-unlabeled";
