//! Class-tagged detections and the per-frame detection set.

mod common;

pub use class::*;
pub mod class;

pub use detection_set::*;
pub mod detection_set;

pub use label::*;
pub mod label;
