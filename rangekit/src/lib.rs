pub mod classes;
pub mod config;
pub mod error;
pub mod events;
pub mod intent;
pub mod utils;
pub mod widgets;

pub use config::SliderConfig;
pub use error::ConfigError;
pub use intent::Intent;
pub use widgets::MultiRangeSlider;

pub mod prelude {
    pub use crate::config::SliderConfig;
    pub use crate::error::ConfigError;
    pub use crate::events::EventResult;
    pub use crate::intent::Intent;
    pub use crate::widgets::multi_range_slider::{
        HandleProps, HandleType, LabelRenderer, MultiRangeSlider, SliderValues, TrackGeometry,
    };

    pub use rangedom::{Element, Event, Key, PointerButton, PointerEvent};
}
