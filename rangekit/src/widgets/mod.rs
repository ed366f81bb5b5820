//! Built-in widgets.
//!
//! Each widget owns its interaction state and renders to a
//! `rangedom::Element` tree. Input is fed back through the widget's
//! `handle_event`, which reports an [`EventResult`](crate::events::EventResult)
//! and invokes the owner's callbacks.

pub mod multi_range_slider;

pub use multi_range_slider::MultiRangeSlider;
