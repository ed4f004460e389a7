use crate::{common::*, Element, Point, TLBR};

/// The generic rectangle.
pub trait Rect {
    type Type: Element;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;
}

/// Geometry derived from the [Rect] accessors.
pub trait RectNum: Rect {
    fn tlbr(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.b(), self.r()]
    }

    /// The area. Sides are widened to `f64` before the product.
    fn area(&self) -> f64 {
        let [t, l, b, r] = self.tlbr().map(Into::<f64>::into);
        (b - t) * (r - l)
    }

    /// The center point. Integer boxes may have a center on a half pixel.
    fn center(&self) -> Point<f64> {
        let t: f64 = self.t().into();
        let l: f64 = self.l().into();
        let b: f64 = self.b().into();
        let r: f64 = self.r().into();
        Point::new((l + r) / 2.0, (t + b) / 2.0)
    }

    /// Compute the intersection in TLBR format, if the rectangles overlap
    /// with positive area.
    fn intersect_with<R>(&self, other: &R) -> Option<TLBR<Self::Type>>
    where
        R: Rect<Type = Self::Type>,
    {
        let t = max(self.t(), other.t());
        let l = max(self.l(), other.l());
        let b = min(self.b(), other.b());
        let r = min(self.r(), other.r());
        (b > t && r > l).then(|| TLBR { t, l, b, r })
    }

    fn intersection_area_with<R>(&self, other: &R) -> f64
    where
        R: Rect<Type = Self::Type>,
    {
        self.intersect_with(other)
            .map(|rect| rect.area())
            .unwrap_or(0.0)
    }

    /// Intersection over union. Returns zero when the union has no area.
    fn iou_with<R>(&self, other: &R) -> f64
    where
        R: Rect<Type = Self::Type>,
    {
        let inter_area = self.intersection_area_with(other);
        let union_area = self.area() + other.area() - inter_area;

        if union_area <= 0.0 {
            return 0.0;
        }
        inter_area / union_area
    }

    /// Euclidean distance between the rectangle centers.
    fn center_distance_to<R>(&self, other: &R) -> f64
    where
        R: Rect<Type = Self::Type>,
    {
        self.center().distance_to(&other.center())
    }
}

impl<T> RectNum for T where T: Rect {}

fn max<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs >= rhs {
        lhs
    } else {
        rhs
    }
}

fn min<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs <= rhs {
        lhs
    } else {
        rhs
    }
}
