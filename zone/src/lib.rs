//! Operator-defined camera zones and zone membership tests.

mod common;

pub use polygon::*;
pub mod polygon;

pub use sample::*;
pub mod sample;

pub use zone::*;
pub mod zone;

pub use zone_set::*;
pub mod zone_set;
