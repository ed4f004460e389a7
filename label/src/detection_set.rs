use crate::{common::*, BoxRecord, Detection, ObjectClass, SeatingDetection};

/// The detector output for one frame, grouped by class.
///
/// All five classes are always present as keys, in [ObjectClass] order.
/// Within a class, detections keep the detector's emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<ObjectClass, Vec<BoxRecord>>",
    into = "IndexMap<ObjectClass, Vec<BoxRecord>>"
)]
pub struct DetectionSet {
    classes: IndexMap<ObjectClass, Vec<Detection>>,
}

impl DetectionSet {
    /// Create a set with an empty list for every class.
    pub fn new() -> Self {
        let classes = ObjectClass::iter().map(|class| (class, vec![])).collect();
        Self { classes }
    }

    /// Append a detection to the list of its class.
    pub fn push(&mut self, detection: Detection) {
        self.classes
            .entry(detection.class())
            .or_default()
            .push(detection);
    }

    pub fn get(&self, class: ObjectClass) -> &[Detection] {
        self.classes
            .get(&class)
            .map(|detections| detections.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, class: ObjectClass) -> usize {
        self.get(class).len()
    }

    /// Total number of detections over all classes.
    pub fn len(&self) -> usize {
        self.classes.values().map(|detections| detections.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectClass, &[Detection])> {
        self.classes
            .iter()
            .map(|(&class, detections)| (class, detections.as_slice()))
    }

    pub fn detections(&self) -> impl Iterator<Item = &Detection> {
        self.classes.values().flatten()
    }

    /// Chairs, then benches, then couches, each tagged with its seating
    /// class and in detector order.
    pub fn seating(&self) -> Vec<SeatingDetection> {
        self.iter()
            .filter(|(class, _)| class.seating().is_some())
            .flat_map(|(_, detections)| detections.iter().filter_map(Detection::to_seating))
            .collect()
    }

    /// Keep or replace each detection, preserving class and order.
    pub fn filter_map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Detection) -> Option<Detection>,
    {
        let classes = self
            .classes
            .into_iter()
            .map(|(class, detections)| {
                let detections = detections.into_iter().filter_map(&mut f).collect();
                (class, detections)
            })
            .collect();
        Self { classes }
    }
}

impl Default for DetectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Detection> for DetectionSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Detection>,
    {
        let mut set = Self::new();
        iter.into_iter().for_each(|detection| set.push(detection));
        set
    }
}

impl TryFrom<IndexMap<ObjectClass, Vec<BoxRecord>>> for DetectionSet {
    type Error = Error;

    fn try_from(from: IndexMap<ObjectClass, Vec<BoxRecord>>) -> Result<Self, Self::Error> {
        let mut set = Self::new();

        for (class, records) in from {
            for (index, record) in records.into_iter().enumerate() {
                let detection = record.into_detection(class).map_err(|err| {
                    format_err!("invalid '{}' detection at index {}: {}", class, index, err)
                })?;
                set.push(detection);
            }
        }

        Ok(set)
    }
}

impl From<DetectionSet> for IndexMap<ObjectClass, Vec<BoxRecord>> {
    fn from(from: DetectionSet) -> Self {
        from.classes
            .iter()
            .map(|(&class, detections)| (class, detections.iter().map(BoxRecord::from).collect()))
            .collect()
    }
}
