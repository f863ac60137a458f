pub mod frame;
pub mod rect;

pub use frame::Frame;
pub use rect::Rect;
