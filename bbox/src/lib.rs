//! Axis-aligned bounding box types and the overlap metrics shared by the
//! spatial analysis crates.

mod common;

pub use element::*;
pub mod element;

pub use point::*;
pub mod point;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub mod overlap;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
