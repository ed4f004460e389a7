use crate::common::*;

/// Restricts a detection set to the boxes inside a camera zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneFilter<'a> {
    zone: &'a Zone,
    threshold: f64,
}

impl<'a> ZoneFilter<'a> {
    pub fn new(zone: &'a Zone, threshold: f64) -> Self {
        Self { zone, threshold }
    }

    /// Keep the boxes whose zone percentage reaches the threshold, each
    /// stamped with that percentage. Class membership and order are kept.
    pub fn apply(&self, detections: DetectionSet) -> DetectionSet {
        let num_input = detections.len();
        let filtered = detections.filter_map(|detection| {
            let percentage = self.zone.bbox_zone_percentage(detection.rect());
            (percentage >= self.threshold).then(|| detection.with_zone_percentage(r64(percentage)))
        });

        debug!(
            "{}: kept {} of {} detections",
            self.zone,
            filtered.len(),
            num_input
        );
        filtered
    }

    /// Stamp every box with its zone percentage without dropping any.
    pub fn annotate(&self, detections: DetectionSet) -> DetectionSet {
        detections.filter_map(|detection| {
            let percentage = self.zone.bbox_zone_percentage(detection.rect());
            Some(detection.with_zone_percentage(r64(percentage)))
        })
    }
}

/// Keep the detections whose confidence is at least `min_confidence`.
pub fn filter_by_confidence(detections: DetectionSet, min_confidence: f64) -> DetectionSet {
    detections.filter_map(|detection| {
        (detection.confidence() >= min_confidence).then(|| detection)
    })
}

/// Apply the zone if one is configured, otherwise return the set unchanged.
pub fn filter_by_zone(detections: DetectionSet, zone: Option<&Zone>, threshold: f64) -> DetectionSet {
    match zone {
        Some(zone) => ZoneFilter::new(zone, threshold).apply(detections),
        None => detections,
    }
}
