use crate::{common::*, ObjectClass, SeatingClass};

/// A detector output box.
pub type Detection = Label<PixelTLBR, ObjectClass>;

/// A seat tagged with its seating class.
pub type SeatingDetection = Label<PixelTLBR, SeatingClass>;

/// A rectangle tagged with a class and a detector confidence.
///
/// Coordinates, class and confidence are fixed at construction. The only
/// later annotation is the zone percentage, added by value through
/// [Label::with_zone_percentage].
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Label<R, C> {
    #[getset(get = "pub")]
    rect: R,
    class: C,
    #[getset(get_copy = "pub")]
    confidence: R64,
    /// Fraction of the zone sample points inside the camera zone.
    #[getset(get_copy = "pub")]
    zone_percentage: Option<R64>,
}

impl<R, C> Label<R, C>
where
    R: Rect,
{
    pub fn new(rect: R, class: C, confidence: f64) -> Result<Self> {
        ensure!(
            confidence.is_finite() && (0.0..=1.0).contains(&confidence),
            "confidence must be in range [0, 1], but get {}",
            confidence
        );

        Ok(Self {
            rect,
            class,
            confidence: r64(confidence),
            zone_percentage: None,
        })
    }
}

impl<R, C> Label<R, C> {
    pub fn with_zone_percentage(self, zone_percentage: R64) -> Self {
        Self {
            zone_percentage: Some(zone_percentage),
            ..self
        }
    }

    /// Re-tag the same rectangle with another class.
    pub fn with_class<D>(&self, class: D) -> Label<R, D>
    where
        R: Clone,
    {
        Label {
            rect: self.rect.clone(),
            class,
            confidence: self.confidence,
            zone_percentage: self.zone_percentage,
        }
    }
}

impl<R, C> Label<R, C>
where
    C: Copy,
{
    pub fn class(&self) -> C {
        self.class
    }
}

impl Detection {
    pub fn from_xyxy(xyxy: [i32; 4], class: ObjectClass, confidence: f64) -> Result<Self> {
        Self::new(PixelTLBR::try_from_xyxy(xyxy)?, class, confidence)
    }

    /// Tag as a seat if the class is a seating class.
    pub fn to_seating(&self) -> Option<SeatingDetection> {
        let class = self.class.seating()?;
        Some(self.with_class(class))
    }
}

/// The per-box record in the detector's JSON output. The class is the key
/// of the enclosing map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_percentage: Option<f64>,
}

impl BoxRecord {
    pub fn into_detection(self, class: ObjectClass) -> Result<Detection> {
        let Self {
            x1,
            y1,
            x2,
            y2,
            confidence,
            zone_percentage,
        } = self;
        let detection = Detection::from_xyxy([x1, y1, x2, y2], class, confidence)?;

        let detection = match zone_percentage {
            Some(pct) => {
                ensure!(
                    pct.is_finite() && (0.0..=1.0).contains(&pct),
                    "zone_percentage must be in range [0, 1], but get {}",
                    pct
                );
                detection.with_zone_percentage(r64(pct))
            }
            None => detection,
        };

        Ok(detection)
    }
}

impl From<&Detection> for BoxRecord {
    fn from(from: &Detection) -> Self {
        let [x1, y1, x2, y2] = from.rect.xyxy();
        Self {
            x1,
            y1,
            x2,
            y2,
            confidence: from.confidence.raw(),
            zone_percentage: from.zone_percentage.map(|pct| pct.raw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_bad_confidence() {
        let rect = PixelTLBR::try_from_xyxy([0, 0, 10, 10]).unwrap();
        assert!(Label::new(rect, ObjectClass::Chair, 1.5).is_err());
        assert!(Label::new(rect, ObjectClass::Chair, -0.1).is_err());
        assert!(Label::new(rect, ObjectClass::Chair, f64::NAN).is_err());
        assert!(Label::new(rect, ObjectClass::Chair, 1.0).is_ok());
    }

    #[test]
    fn zone_percentage_keeps_box() {
        let det = Detection::from_xyxy([3, 4, 50, 60], ObjectClass::Person, 0.8).unwrap();
        let stamped = det.clone().with_zone_percentage(r64(0.5));

        assert_eq!(stamped.rect(), det.rect());
        assert_eq!(stamped.class(), det.class());
        assert_eq!(stamped.confidence(), det.confidence());
        assert_eq!(stamped.zone_percentage(), Some(r64(0.5)));
        assert_eq!(det.zone_percentage(), None);
    }

    #[test]
    fn seating_tag() {
        let chair = Detection::from_xyxy([0, 0, 10, 10], ObjectClass::Couch, 0.5).unwrap();
        let seat = chair.to_seating().unwrap();
        assert_eq!(seat.class(), SeatingClass::Couch);
        assert_eq!(seat.rect(), chair.rect());

        let person = Detection::from_xyxy([0, 0, 10, 10], ObjectClass::Person, 0.5).unwrap();
        assert!(person.to_seating().is_none());
    }

    #[test]
    fn record_conversion() {
        let record = BoxRecord {
            x1: 1,
            y1: 2,
            x2: 3,
            y2: 4,
            confidence: 0.25,
            zone_percentage: None,
        };
        let det = record.clone().into_detection(ObjectClass::Bench).unwrap();
        assert_eq!(BoxRecord::from(&det), record);

        let inverted = BoxRecord { x1: 5, ..record };
        assert!(inverted.into_detection(ObjectClass::Bench).is_err());
    }
}
