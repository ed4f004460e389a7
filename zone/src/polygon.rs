use crate::common::*;

const COLLINEAR_EPSILON: f64 = 1e-9;

/// A closed polygon in pixel coordinates. The last vertex connects back to
/// the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point<i32>>,
}

impl Polygon {
    pub fn new<P, I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<i32>>,
    {
        let vertices: Vec<Point<i32>> = vertices.into_iter().map(Into::into).collect();
        ensure!(
            vertices.len() >= 3,
            "a zone polygon needs at least 3 vertices, but get {}",
            vertices.len()
        );
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point<i32>] {
        &self.vertices
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point<f64>, Point<f64>)> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices
            .iter()
            .zip(next)
            .map(|(from, to)| (from.to_f64(), to.to_f64()))
    }

    /// Whether the point lies inside the polygon or on its boundary.
    ///
    /// Boundary points are detected explicitly. Everything else goes through
    /// an even-odd ray cast towards +x.
    pub fn contains(&self, point: Point<f64>) -> bool {
        if self
            .edges()
            .any(|(from, to)| is_on_segment(from, to, point))
        {
            return true;
        }

        self.edges()
            .filter(|(from, to)| (from.y > point.y) != (to.y > point.y))
            .filter(|(from, to)| {
                let cross_x = from.x + (point.y - from.y) * (to.x - from.x) / (to.y - from.y);
                point.x < cross_x
            })
            .count()
            % 2
            == 1
    }
}

fn is_on_segment(from: Point<f64>, to: Point<f64>, point: Point<f64>) -> bool {
    let cross = (to.x - from.x) * (point.y - from.y) - (to.y - from.y) * (point.x - from.x);
    if cross.abs() > COLLINEAR_EPSILON {
        return false;
    }

    let within_x = point.x >= from.x.min(to.x) && point.x <= from.x.max(to.x);
    let within_y = point.y >= from.y.min(to.y) && point.y <= from.y.max(to.y);
    within_x && within_y
}
