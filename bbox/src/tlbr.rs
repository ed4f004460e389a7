use super::Rect;
use crate::{common::*, Element};

/// Bounding box in pixel coordinates.
pub type PixelTLBR = TLBR<i32>;

/// Bounding box in TLBR format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T>
where
    T: Element,
{
    /// Build from the detector's `[x1, y1, x2, y2]` corner order.
    pub fn try_from_xyxy(xyxy: [T; 4]) -> Result<Self> {
        let [x1, y1, x2, y2] = xyxy;
        Self::try_from_tlbr([y1, x1, y2, x2])
    }

    pub fn xyxy(&self) -> [T; 4] {
        [self.l, self.t, self.r, self.b]
    }
}

impl<T> Rect for TLBR<T>
where
    T: Element,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(
            b >= t && r >= l,
            "malformed box: x2 >= x1 and y2 >= y1 must hold"
        );

        Ok(Self { t, l, b, r })
    }
}
