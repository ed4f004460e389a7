//! Seat occupancy.
//!
//! A seat and a person match when their boxes overlap enough *or* their
//! centers are close enough. Either condition alone is sufficient. Matches
//! are not resolved into a one-to-one assignment: one person may occupy two
//! adjacent seats and one seat may be claimed by several persons.

use crate::{common::*, config::AnalysisConfig};

/// Occupied and free seats of one seating class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyCount {
    pub occupied: usize,
    pub unoccupied: usize,
}

impl OccupancyCount {
    pub fn total(&self) -> usize {
        self.occupied + self.unoccupied
    }
}

/// Occupancy facts of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Counts for every seating class, in [SeatingClass] order.
    pub per_class: IndexMap<SeatingClass, OccupancyCount>,
    /// Number of distinct persons matching at least one seat of any class.
    pub persons_sitting: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyClassifier {
    iou_threshold: f64,
    proximity_threshold: f64,
}

impl OccupancyClassifier {
    pub fn new(iou_threshold: f64, proximity_threshold: f64) -> Self {
        Self {
            iou_threshold,
            proximity_threshold,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.iou_threshold.raw(),
            config.occupancy_proximity.raw(),
        )
    }

    /// The matching rule shared by seat occupancy and sitting persons.
    pub fn is_match<A, B>(&self, seat: &A, person: &B) -> bool
    where
        A: Rect,
        B: Rect<Type = A::Type>,
    {
        overlap::iou(seat, person) > self.iou_threshold
            || overlap::center_distance(seat, person) < self.proximity_threshold
    }

    /// Whether any person matches the seat. Stops at the first match.
    pub fn is_occupied<C>(&self, seat: &Label<PixelTLBR, C>, persons: &[Detection]) -> bool {
        persons
            .iter()
            .any(|person| self.is_match(seat.rect(), person.rect()))
    }

    pub fn count_occupied<C>(
        &self,
        seats: &[Label<PixelTLBR, C>],
        persons: &[Detection],
    ) -> OccupancyCount {
        let occupied = seats
            .iter()
            .filter(|seat| self.is_occupied(seat, persons))
            .count();

        OccupancyCount {
            occupied,
            unoccupied: seats.len() - occupied,
        }
    }

    /// Number of persons matching at least one of the seats.
    pub fn count_sitting<C>(&self, seats: &[Label<PixelTLBR, C>], persons: &[Detection]) -> usize {
        persons
            .iter()
            .filter(|person| {
                seats
                    .iter()
                    .any(|seat| self.is_match(seat.rect(), person.rect()))
            })
            .count()
    }

    /// Occupancy per seating class and the number of sitting persons.
    pub fn classify(&self, detections: &DetectionSet) -> Occupancy {
        let persons = detections.get(ObjectClass::Person);

        let per_class: IndexMap<_, _> = SeatingClass::iter()
            .map(|class| {
                let seats = detections.get(class.into());
                let count = self.count_occupied(seats, persons);
                debug!(
                    "{}: {} occupied, {} unoccupied",
                    class, count.occupied, count.unoccupied
                );
                (class, count)
            })
            .collect();

        let persons_sitting = self.count_sitting(&detections.seating(), persons);
        debug!("{} of {} persons sitting", persons_sitting, persons.len());

        Occupancy {
            per_class,
            persons_sitting,
        }
    }
}

impl Default for OccupancyClassifier {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
