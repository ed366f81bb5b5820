pub mod element;
pub mod event;
pub mod html;
pub mod types;

pub use element::{find_element, Content, Element};
pub use event::{Event, Key, PointerButton, PointerEvent, PointerKind};
pub use html::to_html;
pub use types::*;
