use crate::{common::*, sample_points, Polygon, NUM_SAMPLE_POINTS};

/// The analysis zone of one camera.
///
/// A zone is validated when it is built and has no mutating methods, so it
/// applies uniformly to every frame of the camera.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
#[serde(try_from = "ZoneConfig", into = "ZoneConfig")]
pub struct Zone {
    #[getset(get = "pub")]
    camera_id: String,
    #[getset(get = "pub")]
    polygon: Polygon,
    /// The table this camera is responsible for, if any.
    #[getset(get_copy = "pub")]
    table_id: Option<i64>,
}

impl Zone {
    pub fn new<S, P, I>(camera_id: S, polygon: I, table_id: Option<i64>) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<Point<i32>>,
    {
        let camera_id = camera_id.into();
        ensure!(!camera_id.trim().is_empty(), "camera id must not be empty");

        Ok(Self {
            camera_id,
            polygon: Polygon::new(polygon)?,
            table_id,
        })
    }

    /// Build from a flat `x1 y1 x2 y2 ...` coordinate list.
    pub fn from_flat_coords<S>(camera_id: S, coords: &[i32], table_id: Option<i64>) -> Result<Self>
    where
        S: Into<String>,
    {
        ensure!(
            coords.len() >= 6 && coords.len() % 2 == 0,
            "zone must have at least 3 points (6 coordinates) given as x y pairs, but get {} values",
            coords.len()
        );
        let vertices = coords.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1]));
        Self::new(camera_id, vertices, table_id)
    }

    /// Whether `(x, y)` lies inside the zone or on its boundary.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.polygon.contains(Point::new(x, y))
    }

    /// Fraction of the nine probe points of `rect` that fall inside the zone.
    ///
    /// This approximates the overlapped area. Concave zones and boxes much
    /// larger than the zone can be over- or under-estimated.
    pub fn bbox_zone_percentage<R>(&self, rect: &R) -> f64
    where
        R: Rect,
    {
        let num_inside = sample_points(rect)
            .iter()
            .filter(|point| self.polygon.contains(**point))
            .count();
        num_inside as f64 / NUM_SAMPLE_POINTS as f64
    }

    pub fn bbox_in_zone<R>(&self, rect: &R, threshold: f64) -> bool
    where
        R: Rect,
    {
        self.bbox_zone_percentage(rect) >= threshold
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "camera {}", self.camera_id)?;
        if let Some(table_id) = self.table_id {
            write!(f, " - table {}", table_id)?;
        }
        Ok(())
    }
}

/// Serialized form of a [Zone].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub camera_id: String,
    /// Vertices as `[x, y]` pairs.
    pub polygon: Vec<[i32; 2]>,
    #[serde(default)]
    pub table_id: Option<i64>,
}

impl TryFrom<ZoneConfig> for Zone {
    type Error = Error;

    fn try_from(from: ZoneConfig) -> Result<Self, Self::Error> {
        let ZoneConfig {
            camera_id,
            polygon,
            table_id,
        } = from;
        Self::new(camera_id, polygon, table_id)
    }
}

impl From<Zone> for ZoneConfig {
    fn from(from: Zone) -> Self {
        let Zone {
            camera_id,
            polygon,
            table_id,
        } = from;
        Self {
            camera_id,
            polygon: polygon
                .vertices()
                .iter()
                .map(|point| [point.x, point.y])
                .collect(),
            table_id,
        }
    }
}
