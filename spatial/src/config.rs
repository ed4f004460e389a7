use crate::common::*;

/// Tunable thresholds of the analysis.
///
/// Every field has a default, so an empty section in a configuration file
/// yields [AnalysisConfig::default].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Detections below this confidence are dropped before any other step.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: R64,
    /// Minimum fraction of a box's probe points inside the camera zone for
    /// the box to be kept.
    #[serde(default = "default_zone_threshold")]
    pub zone_threshold: R64,
    /// A seat and a person overlapping with IoU above this value match.
    #[serde(default = "default_iou_threshold")]
    pub iou_threshold: R64,
    /// A seat and a person whose centers are closer than this many pixels
    /// match.
    #[serde(default = "default_occupancy_proximity")]
    pub occupancy_proximity: R64,
    /// A seat is assigned to the nearest table only if their centers are
    /// closer than this many pixels.
    #[serde(default = "default_seating_proximity")]
    pub seating_proximity: R64,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        let Self {
            min_confidence,
            zone_threshold,
            iou_threshold,
            occupancy_proximity,
            seating_proximity,
        } = *self;

        ensure!(
            (0.0..=1.0).contains(&min_confidence.raw()),
            "min_confidence must be in range [0, 1], but get {}",
            min_confidence
        );
        ensure!(
            (0.0..=1.0).contains(&zone_threshold.raw()),
            "zone_threshold must be in range [0, 1], but get {}",
            zone_threshold
        );
        ensure!(
            (0.0..=1.0).contains(&iou_threshold.raw()),
            "iou_threshold must be in range [0, 1], but get {}",
            iou_threshold
        );
        ensure!(
            occupancy_proximity >= 0.0,
            "occupancy_proximity must be non-negative, but get {}",
            occupancy_proximity
        );
        ensure!(
            seating_proximity >= 0.0,
            "seating_proximity must be non-negative, but get {}",
            seating_proximity
        );
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            zone_threshold: default_zone_threshold(),
            iou_threshold: default_iou_threshold(),
            occupancy_proximity: default_occupancy_proximity(),
            seating_proximity: default_seating_proximity(),
        }
    }
}

fn default_min_confidence() -> R64 {
    r64(0.3)
}

fn default_zone_threshold() -> R64 {
    r64(0.7)
}

fn default_iou_threshold() -> R64 {
    r64(0.2)
}

fn default_occupancy_proximity() -> R64 {
    r64(50.0)
}

fn default_seating_proximity() -> R64 {
    r64(150.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let config: AnalysisConfig = json5::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.min_confidence, 0.3);
        assert_eq!(config.zone_threshold, 0.7);
        assert_eq!(config.iou_threshold, 0.2);
        assert_eq!(config.occupancy_proximity, 50.0);
        assert_eq!(config.seating_proximity, 150.0);
        config.validate().unwrap();
    }

    #[test]
    fn partial_override() {
        let config: AnalysisConfig =
            json5::from_str("{ iou_threshold: 0.3, seating_proximity: 200.0 }").unwrap();
        assert_eq!(config.iou_threshold, 0.3);
        assert_eq!(config.seating_proximity, 200.0);
        assert_eq!(config.zone_threshold, 0.7);
    }

    #[test]
    fn reject_out_of_range() {
        let config = AnalysisConfig {
            zone_threshold: r64(1.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalysisConfig {
            min_confidence: r64(-0.1),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalysisConfig {
            occupancy_proximity: r64(-1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_field() {
        assert!(json5::from_str::<AnalysisConfig>("{ proximity: 10 }").is_err());
    }
}
