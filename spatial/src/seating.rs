//! Greedy nearest-table assignment of seats.

use crate::{common::*, config::AnalysisConfig};

/// Seats assigned to one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSeating {
    pub chairs: usize,
    pub benches: usize,
    pub couches: usize,
    pub total: usize,
}

impl TableSeating {
    pub fn add(&mut self, class: SeatingClass) {
        match class {
            SeatingClass::Chair => self.chairs += 1,
            SeatingClass::Bench => self.benches += 1,
            SeatingClass::Couch => self.couches += 1,
        }
        self.total += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatingClusterer {
    proximity_threshold: f64,
}

impl SeatingClusterer {
    pub fn new(proximity_threshold: f64) -> Self {
        Self {
            proximity_threshold,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.seating_proximity.raw())
    }

    /// Index of and distance to the closest table, if it is strictly closer
    /// than the proximity threshold.
    ///
    /// On equal distances the table with the lower index wins.
    pub fn nearest_table<R>(&self, seat: &R, tables: &[Detection]) -> Option<(usize, f64)>
    where
        R: Rect<Type = i32>,
    {
        tables
            .iter()
            .enumerate()
            .map(|(index, table)| (index, overlap::center_distance(seat, table.rect())))
            .fold(None, |nearest: Option<(usize, f64)>, (index, distance)| {
                match nearest {
                    Some((_, min_distance)) if distance >= min_distance => nearest,
                    _ => Some((index, distance)),
                }
            })
            .filter(|&(_, distance)| distance < self.proximity_threshold)
    }

    /// Assign every seat to its nearest table.
    ///
    /// The returned map is keyed by table index, the position in `tables`.
    /// Tables without any assigned seat are absent. Seats with no table in
    /// range are dropped.
    pub fn cluster(
        &self,
        tables: &[Detection],
        seats: &[SeatingDetection],
    ) -> BTreeMap<usize, TableSeating> {
        let mut seating_per_table: BTreeMap<usize, TableSeating> = BTreeMap::new();

        for (seat_index, seat) in seats.iter().enumerate() {
            match self.nearest_table(seat.rect(), tables) {
                Some((table_index, distance)) => {
                    debug!(
                        "{} {} -> table {} ({:.1} px)",
                        seat.class(),
                        seat_index,
                        table_index,
                        distance
                    );
                    seating_per_table
                        .entry(table_index)
                        .or_default()
                        .add(seat.class());
                }
                None => {
                    debug!("{} {} is not near any table", seat.class(), seat_index);
                }
            }
        }

        seating_per_table
    }

    /// Cluster the seats of a detection set around its dining tables.
    pub fn cluster_detections(&self, detections: &DetectionSet) -> BTreeMap<usize, TableSeating> {
        self.cluster(
            detections.get(ObjectClass::DiningTable),
            &detections.seating(),
        )
    }
}

impl Default for SeatingClusterer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(xyxy: [i32; 4], class: ObjectClass) -> Detection {
        Detection::from_xyxy(xyxy, class, 0.9).unwrap()
    }

    #[test]
    fn assign_near_and_drop_far() {
        let set: DetectionSet = vec![
            det([0, 0, 100, 100], ObjectClass::DiningTable),
            det([120, 40, 160, 80], ObjectClass::Chair),
            det([1000, 1000, 1040, 1040], ObjectClass::Chair),
        ]
        .into_iter()
        .collect();

        let seating = SeatingClusterer::default().cluster_detections(&set);
        assert_eq!(seating.len(), 1);
        assert_eq!(
            seating[&0],
            TableSeating {
                chairs: 1,
                benches: 0,
                couches: 0,
                total: 1
            }
        );
    }

    #[test]
    fn nearest_table_wins() {
        let tables = [
            det([0, 0, 100, 100], ObjectClass::DiningTable),
            det([200, 0, 300, 100], ObjectClass::DiningTable),
        ];
        let clusterer = SeatingClusterer::default();

        // 120 px from table 0, 80 px from table 1
        let seat = det([160, 40, 180, 60], ObjectClass::Chair);
        let (index, distance) = clusterer.nearest_table(seat.rect(), &tables).unwrap();
        assert_eq!(index, 1);
        assert_eq!(distance, 80.0);
    }

    #[test]
    fn tie_goes_to_lower_index() {
        let tables = [
            det([0, 0, 100, 100], ObjectClass::DiningTable),
            det([200, 0, 300, 100], ObjectClass::DiningTable),
        ];
        let clusterer = SeatingClusterer::default();

        // centered exactly between both tables
        let seat = det([140, 40, 160, 60], ObjectClass::Bench);
        let (index, _) = clusterer.nearest_table(seat.rect(), &tables).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn threshold_is_strict() {
        let tables = [det([0, 0, 100, 100], ObjectClass::DiningTable)];
        let clusterer = SeatingClusterer::new(100.0);

        // exactly 100 px to the right
        let seat = det([140, 40, 160, 60], ObjectClass::Chair);
        assert!(clusterer.nearest_table(seat.rect(), &tables).is_none());

        let seat = det([139, 40, 159, 60], ObjectClass::Chair);
        assert!(clusterer.nearest_table(seat.rect(), &tables).is_some());
    }

    #[test]
    fn map_is_sparse() {
        let set: DetectionSet = vec![
            det([0, 0, 100, 100], ObjectClass::DiningTable),
            det([1000, 0, 1100, 100], ObjectClass::DiningTable),
            det([2000, 0, 2100, 100], ObjectClass::DiningTable),
            det([2120, 40, 2160, 80], ObjectClass::Chair),
            det([1980, 30, 2000, 70], ObjectClass::Couch),
            det([2000, 110, 2100, 140], ObjectClass::Bench),
            det([-60, 30, -20, 70], ObjectClass::Chair),
        ]
        .into_iter()
        .collect();

        let seating = SeatingClusterer::default().cluster_detections(&set);
        let tables: Vec<_> = seating.keys().copied().collect();
        assert_eq!(tables, [0, 2]);
        assert_eq!(
            seating[&2],
            TableSeating {
                chairs: 1,
                benches: 1,
                couches: 1,
                total: 3
            }
        );
        assert_eq!(seating[&0].chairs, 1);
        assert_eq!(seating[&0].total, 1);
    }

    #[test]
    fn no_tables_or_no_seats() {
        let clusterer = SeatingClusterer::default();
        let chair = det([0, 0, 10, 10], ObjectClass::Chair);

        assert!(clusterer.cluster(&[], &[chair.to_seating().unwrap()]).is_empty());
        assert!(clusterer
            .cluster(&[det([0, 0, 10, 10], ObjectClass::DiningTable)], &[])
            .is_empty());
    }

    #[test]
    fn equal_boxes_keep_their_own_class() {
        // a chair and a couch with identical coordinates
        let set: DetectionSet = vec![
            det([0, 0, 100, 100], ObjectClass::DiningTable),
            det([110, 40, 150, 80], ObjectClass::Chair),
            det([110, 40, 150, 80], ObjectClass::Couch),
        ]
        .into_iter()
        .collect();

        let seating = SeatingClusterer::default().cluster_detections(&set);
        assert_eq!(seating[&0].chairs, 1);
        assert_eq!(seating[&0].couches, 1);
        assert_eq!(seating[&0].total, 2);
    }
}
