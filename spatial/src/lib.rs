//! Spatial relationship engine: zone filtering, seat occupancy and
//! seat-to-table clustering over one frame of detections.

mod common;

pub mod analysis;
pub mod config;
pub mod filter;
pub mod occupancy;
pub mod seating;

pub use analysis::{analyze, SpatialAnalysisResult};
pub use config::AnalysisConfig;
pub use filter::{filter_by_confidence, filter_by_zone, ZoneFilter};
pub use occupancy::{Occupancy, OccupancyClassifier, OccupancyCount};
pub use seating::{SeatingClusterer, TableSeating};
