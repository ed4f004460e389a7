use crate::{common::*, Zone};

/// Zones keyed by camera id, fixed once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Zone>", into = "Vec<Zone>")]
pub struct ZoneSet {
    zones: IndexMap<String, Zone>,
}

impl ZoneSet {
    pub fn new<I>(zones: I) -> Result<Self>
    where
        I: IntoIterator<Item = Zone>,
    {
        let mut map = IndexMap::new();

        for zone in zones {
            let camera_id = zone.camera_id().clone();
            if map.insert(camera_id.clone(), zone).is_some() {
                bail!("camera '{}' has more than one zone", camera_id);
            }
        }

        Ok(Self { zones: map })
    }

    pub fn get(&self, camera_id: &str) -> Option<&Zone> {
        self.zones.get(camera_id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }
}

impl TryFrom<Vec<Zone>> for ZoneSet {
    type Error = Error;

    fn try_from(from: Vec<Zone>) -> Result<Self, Self::Error> {
        Self::new(from)
    }
}

impl From<ZoneSet> for Vec<Zone> {
    fn from(from: ZoneSet) -> Self {
        from.zones.into_iter().map(|(_, zone)| zone).collect()
    }
}
