//! The JSON envelope printed on stdout.

use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "error")]
    Error,
}

/// Seats around one table. The table id is the 1-based table index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSeatingEntry {
    pub table_id: usize,
    pub chairs_count: usize,
    pub benches_count: usize,
    pub couches_count: usize,
    pub total_seating: usize,
}

/// Report of a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub camera_id: Option<String>,
    pub table_id: Option<i64>,
    pub tables_detected: usize,
    pub chairs_detected: usize,
    pub benches_detected: usize,
    pub couches_detected: usize,
    pub persons_detected: usize,
    pub total_detected: usize,
    pub occupied_chairs: usize,
    pub unoccupied_chairs: usize,
    pub occupied_benches: usize,
    pub unoccupied_benches: usize,
    pub occupied_couches: usize,
    pub unoccupied_couches: usize,
    pub persons_sitting: usize,
    pub table_seating: Vec<TableSeatingEntry>,
    /// Every input detection with its zone percentage, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_detections: Option<DetectionSet>,
    pub status: Status,
}

impl AnalysisReport {
    /// Report the requested camera, whether or not it has a zone.
    pub fn with_camera_id(self, camera_id: Option<String>) -> Self {
        Self {
            camera_id: camera_id.or(self.camera_id),
            ..self
        }
    }

    pub fn with_all_detections(self, all_detections: DetectionSet) -> Self {
        Self {
            all_detections: Some(all_detections),
            ..self
        }
    }
}

impl From<&SpatialAnalysisResult> for AnalysisReport {
    fn from(from: &SpatialAnalysisResult) -> Self {
        let chairs = from.occupancy_of(SeatingClass::Chair);
        let benches = from.occupancy_of(SeatingClass::Bench);
        let couches = from.occupancy_of(SeatingClass::Couch);

        let table_seating = from
            .table_seating
            .iter()
            .map(|(&index, seating)| TableSeatingEntry {
                table_id: index + 1,
                chairs_count: seating.chairs,
                benches_count: seating.benches,
                couches_count: seating.couches,
                total_seating: seating.total,
            })
            .collect();

        Self {
            camera_id: from.camera_id.clone(),
            table_id: from.table_id,
            tables_detected: from.count(ObjectClass::DiningTable),
            chairs_detected: from.count(ObjectClass::Chair),
            benches_detected: from.count(ObjectClass::Bench),
            couches_detected: from.count(ObjectClass::Couch),
            persons_detected: from.count(ObjectClass::Person),
            total_detected: from.total_detected(),
            occupied_chairs: chairs.occupied,
            unoccupied_chairs: chairs.unoccupied,
            occupied_benches: benches.occupied,
            unoccupied_benches: benches.unoccupied,
            occupied_couches: couches.occupied,
            unoccupied_couches: couches.unoccupied,
            persons_sitting: from.persons_sitting,
            table_seating,
            all_detections: None,
            status: Status::Completed,
        }
    }
}

/// Report of a failed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub status: Status,
    pub error_message: String,
    pub detections_file: PathBuf,
    pub camera_id: Option<String>,
    #[serde(rename = "tableId")]
    pub table_id: Option<i64>,
}

impl FailureReport {
    pub fn new(
        error: &Error,
        detections_file: &Path,
        camera_id: Option<&str>,
        table_id: Option<i64>,
    ) -> Self {
        Self {
            status: Status::Error,
            error_message: format!("{:#}", error),
            detections_file: detections_file.to_owned(),
            camera_id: camera_id.map(str::to_owned),
            table_id,
        }
    }
}
