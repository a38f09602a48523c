//! 2D points with [`Unit`] coordinates.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// A position or offset in some 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: Unit,
    /// Vertical coordinate, growing downwards.
    pub y: Unit,
}

impl Point {
    /// The origin of any coordinate space.
    pub const ORIGIN: Self = Self::new(Unit::ZERO, Unit::ZERO);

    /// Create a point from two lengths.
    #[must_use]
    pub const fn new(x: Unit, y: Unit) -> Self {
        Self { x, y }
    }

    /// Create a point in graphic units.
    #[must_use]
    pub const fn graphic(x: f64, y: f64) -> Self {
        Self::new(Unit::graphic(x), Unit::graphic(y))
    }

    /// Attach a page index, producing an absolute document position.
    #[must_use]
    pub const fn on_page(self, page: i32) -> PagePoint {
        PagePoint::new(self.x, self.y, page)
    }

    /// Componentwise equality within the default unit tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A point tagged with a page index.
///
/// Absolute document positions are page-relative: `x` and `y` are measured
/// from the top-left corner of the live area of page `page`. Arithmetic is
/// componentwise, so the difference of two page points carries a page delta
/// which may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PagePoint {
    /// Horizontal coordinate on the page.
    pub x: Unit,
    /// Vertical coordinate on the page.
    pub y: Unit,
    /// Page index (or page delta for relative values).
    pub page: i32,
}

impl PagePoint {
    /// The origin of the first page.
    pub const ORIGIN: Self = Self::new(Unit::ZERO, Unit::ZERO, 0);

    /// Create a page point.
    #[must_use]
    pub const fn new(x: Unit, y: Unit, page: i32) -> Self {
        Self { x, y, page }
    }

    /// Create a page point in graphic units.
    #[must_use]
    pub const fn graphic(x: f64, y: f64, page: i32) -> Self {
        Self::new(Unit::graphic(x), Unit::graphic(y), page)
    }

    /// The position without its page.
    #[must_use]
    pub const fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Offset this position by a page-less delta, staying on the same page.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.page)
    }

    /// Componentwise equality within the default unit tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.page == other.page && self.point().approx_eq(other.point())
    }
}

impl From<Point> for PagePoint {
    fn from(point: Point) -> Self {
        point.on_page(0)
    }
}

impl fmt::Display for PagePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, page {})", self.x, self.y, self.page)
    }
}

impl Add for PagePoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.page + rhs.page)
    }
}

impl Sub for PagePoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.page - rhs.page)
    }
}

impl Neg for PagePoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_points_subtract_pages() {
        let source = PagePoint::graphic(5.0, 6.0, 1);
        let destination = PagePoint::graphic(100.0, 100.0, 4);
        let delta = destination - source;
        assert_eq!(delta, PagePoint::graphic(95.0, 94.0, 3));
    }

    #[test]
    fn offset_keeps_page() {
        let pos = PagePoint::graphic(10.0, 10.0, 2).offset(Point::graphic(5.0, -3.0));
        assert_eq!(pos, PagePoint::graphic(15.0, 7.0, 2));
    }
}
