mod enums;
mod length;
mod style;

pub use enums::{Edge, Tag};
pub use length::Length;
pub use style::InlineStyle;
