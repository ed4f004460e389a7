use crate::{
    common::*,
    config::AnalysisConfig,
    filter::{filter_by_confidence, filter_by_zone},
    occupancy::{OccupancyClassifier, OccupancyCount},
    seating::{SeatingClusterer, TableSeating},
};

/// The spatial facts of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialAnalysisResult {
    /// Camera of the applied zone.
    pub camera_id: Option<String>,
    /// Table the applied zone is responsible for.
    pub table_id: Option<i64>,
    /// Detections per class after zone filtering, in [ObjectClass] order.
    pub class_counts: IndexMap<ObjectClass, usize>,
    /// Occupied and free seats per seating class, in [SeatingClass] order.
    pub occupancy: IndexMap<SeatingClass, OccupancyCount>,
    pub persons_sitting: usize,
    /// Seats per table index. Tables without seats are absent.
    pub table_seating: BTreeMap<usize, TableSeating>,
}

impl SpatialAnalysisResult {
    pub fn count(&self, class: ObjectClass) -> usize {
        self.class_counts.get(&class).copied().unwrap_or(0)
    }

    pub fn total_detected(&self) -> usize {
        self.class_counts.values().sum()
    }

    pub fn occupancy_of(&self, class: SeatingClass) -> OccupancyCount {
        self.occupancy.get(&class).copied().unwrap_or_default()
    }
}

/// Analyze one frame.
///
/// Detections below `config.min_confidence` are dropped first. If a zone is
/// given, the rest are then restricted to it using `config.zone_threshold`.
/// The caller's set is left untouched.
pub fn analyze(
    detections: &DetectionSet,
    zone: Option<&Zone>,
    config: &AnalysisConfig,
) -> SpatialAnalysisResult {
    let detections = filter_by_confidence(detections.clone(), config.min_confidence.raw());
    let detections = filter_by_zone(detections, zone, config.zone_threshold.raw());

    let class_counts: IndexMap<_, _> = detections
        .iter()
        .map(|(class, detections)| (class, detections.len()))
        .collect();
    let occupancy = OccupancyClassifier::from_config(config).classify(&detections);
    let table_seating = SeatingClusterer::from_config(config).cluster_detections(&detections);

    info!(
        "analyzed {} detections: {} tables with seating, {} persons sitting",
        detections.len(),
        table_seating.len(),
        occupancy.persons_sitting
    );

    SpatialAnalysisResult {
        camera_id: zone.map(|zone| zone.camera_id().clone()),
        table_id: zone.and_then(|zone| zone.table_id()),
        class_counts,
        occupancy: occupancy.per_class,
        persons_sitting: occupancy.persons_sitting,
        table_seating,
    }
}
