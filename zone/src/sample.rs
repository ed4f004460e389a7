use crate::common::*;

/// Number of points probed per box by [sample_points].
pub const NUM_SAMPLE_POINTS: usize = 9;

/// The fixed probe set used to approximate box/zone overlap.
///
/// Order: center, the corners clockwise from top-left, then the top, bottom,
/// left and right edge midpoints.
pub fn sample_points<R>(rect: &R) -> [Point<f64>; NUM_SAMPLE_POINTS]
where
    R: Rect,
{
    let t: f64 = rect.t().into();
    let l: f64 = rect.l().into();
    let b: f64 = rect.b().into();
    let r: f64 = rect.r().into();
    let Point { x: cx, y: cy } = rect.center();

    [
        Point::new(cx, cy),
        Point::new(l, t),
        Point::new(r, t),
        Point::new(r, b),
        Point::new(l, b),
        Point::new(cx, t),
        Point::new(cx, b),
        Point::new(l, cy),
        Point::new(r, cy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::PixelTLBR;

    #[test]
    fn probe_layout() {
        let rect = PixelTLBR::try_from_xyxy([10, 20, 30, 60]).unwrap();
        let points = sample_points(&rect);

        assert_eq!(points[0], Point::new(20.0, 40.0));
        assert_eq!(points[1], Point::new(10.0, 20.0));
        assert_eq!(points[3], Point::new(30.0, 60.0));
        assert_eq!(points[5], Point::new(20.0, 20.0));
        assert_eq!(points[8], Point::new(30.0, 40.0));
    }
}
