//! Points anchored to a scene node.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::point::Point;
use crate::units::Unit;

/// A point whose coordinates are relative to an anchor (usually a scene
/// node handle).
///
/// The offset only has meaning in its anchor's coordinate space, so adding or
/// subtracting two anchored points is only defined when they share an
/// anchor. Mismatched anchors are reported as
/// [`GeometryError::MismatchedAnchors`] instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredPoint<A> {
    /// The position relative to the anchor.
    pub point: Point,
    /// The anchor the position is relative to.
    pub parent: A,
}

impl<A: Copy + PartialEq + Debug> AnchoredPoint<A> {
    /// Anchor an existing point.
    #[must_use]
    pub const fn from_point(point: Point, parent: A) -> Self {
        Self { point, parent }
    }

    /// Create an anchored point from two lengths.
    #[must_use]
    pub const fn new(x: Unit, y: Unit, parent: A) -> Self {
        Self::from_point(Point::new(x, y), parent)
    }

    /// Horizontal coordinate relative to the anchor.
    #[must_use]
    pub const fn x(&self) -> Unit {
        self.point.x
    }

    /// Vertical coordinate relative to the anchor.
    #[must_use]
    pub const fn y(&self) -> Unit {
        self.point.y
    }

    /// Add two points in the same anchor space.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MismatchedAnchors`] if the anchors differ.
    pub fn try_add(self, other: Self) -> Result<Self, GeometryError> {
        self.check_anchor(other)?;
        Ok(Self::from_point(self.point + other.point, self.parent))
    }

    /// Subtract two points in the same anchor space.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MismatchedAnchors`] if the anchors differ.
    pub fn try_sub(self, other: Self) -> Result<Self, GeometryError> {
        self.check_anchor(other)?;
        Ok(Self::from_point(self.point - other.point, self.parent))
    }

    /// Scale both coordinates, keeping the anchor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::from_point(self.point * factor, self.parent)
    }

    fn check_anchor(self, other: Self) -> Result<(), GeometryError> {
        if self.parent == other.parent {
            Ok(())
        } else {
            Err(GeometryError::MismatchedAnchors {
                left: format!("{:?}", self.parent),
                right: format!("{:?}", other.parent),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_anchor_adds() {
        let a = AnchoredPoint::new(Unit::graphic(1.0), Unit::graphic(2.0), 7_usize);
        let b = AnchoredPoint::new(Unit::graphic(3.0), Unit::graphic(4.0), 7_usize);
        let sum = a.try_add(b).unwrap();
        assert_eq!(sum.point, Point::graphic(4.0, 6.0));
        assert_eq!(sum.parent, 7);
    }

    #[test]
    fn different_anchors_are_rejected() {
        let a = AnchoredPoint::new(Unit::graphic(1.0), Unit::graphic(2.0), 1_usize);
        let b = AnchoredPoint::new(Unit::graphic(3.0), Unit::graphic(4.0), 2_usize);
        assert!(matches!(
            a.try_sub(b),
            Err(GeometryError::MismatchedAnchors { .. })
        ));
    }
}
