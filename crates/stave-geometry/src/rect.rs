//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::units::Unit;

/// An axis-aligned rectangle, used for bounding boxes and clip regions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: Unit,
    /// Top edge.
    pub y: Unit,
    /// Horizontal extent.
    pub width: Unit,
    /// Vertical extent.
    pub height: Unit,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: Unit, y: Unit, width: Unit, height: Unit) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The smallest rectangle containing every point, or `None` for an
    /// empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> Unit {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> Unit {
        self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The smallest rectangle containing both rectangles.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// The same rectangle moved by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Grow the rectangle by `padding` on every side.
    #[must_use]
    pub fn inflate(&self, padding: Unit) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            self.width + padding * 2.0,
            self.height + padding * 2.0,
        )
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_points() {
        let rect = Rect::from_points([
            Point::graphic(5.0, 6.0),
            Point::graphic(-1.0, 10.0),
            Point::graphic(3.0, 2.0),
        ])
        .unwrap();
        assert_eq!(rect, Rect::new(Unit::graphic(-1.0), Unit::graphic(2.0), Unit::graphic(6.0), Unit::graphic(8.0)));
    }

    #[test]
    fn empty_iterator_has_no_bounds() {
        assert!(Rect::from_points(Vec::<Point>::new()).is_none());
    }

    #[test]
    fn inflate_pads_all_sides() {
        let rect = Rect::new(Unit::graphic(0.0), Unit::graphic(0.0), Unit::graphic(10.0), Unit::graphic(4.0))
            .inflate(Unit::graphic(1.0));
        assert_eq!(rect.origin(), Point::graphic(-1.0, -1.0));
        assert_eq!(rect.width, Unit::graphic(12.0));
        assert_eq!(rect.height, Unit::graphic(6.0));
    }
}
