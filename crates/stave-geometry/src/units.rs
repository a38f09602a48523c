//! Length units.
//!
//! Every [`Unit`] carries its magnitude in its own [`UnitKind`] together with
//! a fixed conversion factor to the canonical *graphic unit* (1/72 inch, the
//! unit rendering backends work in). All arithmetic, equality and ordering go
//! through the canonical value, so lengths of different kinds (millimeters
//! and a staff-relative unit, say) always stay commensurable.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Graphic units per inch.
const GRAPHIC_UNITS_PER_INCH: f64 = 72.0;

/// Millimeters per inch.
const MM_PER_INCH: f64 = 25.4;

/// Default tolerance for [`Unit::approx_eq`], in graphic units.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// The kind of a length, i.e. the factor between its magnitude and the
/// canonical graphic unit.
///
/// The `Display` implementation gives the suffix used when printing a
/// [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize, Deserialize)]
pub enum UnitKind {
    /// The canonical unit: 1/72 inch.
    #[strum(serialize = "gu")]
    Graphic,
    /// Typographic points. Numerically identical to graphic units but kept
    /// distinct so values print the way they were written.
    #[strum(serialize = "pt")]
    Point,
    /// Inches.
    #[strum(serialize = "in")]
    Inch,
    /// Millimeters.
    #[strum(serialize = "mm")]
    Mm,
    /// A relative unit such as a staff space or an em, defined by how many
    /// graphic units one of it spans.
    #[strum(serialize = "su")]
    Scaled {
        /// Graphic units per one of this unit.
        base_per_unit: f64,
    },
}

impl UnitKind {
    /// Graphic units per one of this kind.
    #[must_use]
    pub const fn base_per_unit(self) -> f64 {
        match self {
            Self::Graphic | Self::Point => 1.0,
            Self::Inch => GRAPHIC_UNITS_PER_INCH,
            Self::Mm => GRAPHIC_UNITS_PER_INCH / MM_PER_INCH,
            Self::Scaled { base_per_unit } => base_per_unit,
        }
    }
}

/// A length with a known conversion to the canonical graphic unit.
///
/// ```
/// use stave_geometry::Unit;
///
/// let a = Unit::inch(1.0);
/// let b = Unit::mm(25.4);
/// assert!(a.approx_eq(b));
/// assert!((a + b).approx_eq(Unit::inch(2.0)));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    value: f64,
    kind: UnitKind,
}

impl Unit {
    /// Zero graphic units.
    pub const ZERO: Self = Self::graphic(0.0);

    /// Create a length of `value` in the given kind.
    #[must_use]
    pub const fn new(value: f64, kind: UnitKind) -> Self {
        Self { value, kind }
    }

    /// Create a length in graphic units.
    #[must_use]
    pub const fn graphic(value: f64) -> Self {
        Self::new(value, UnitKind::Graphic)
    }

    /// Create a length in typographic points.
    #[must_use]
    pub const fn pt(value: f64) -> Self {
        Self::new(value, UnitKind::Point)
    }

    /// Create a length in millimeters.
    #[must_use]
    pub const fn mm(value: f64) -> Self {
        Self::new(value, UnitKind::Mm)
    }

    /// Create a length in inches.
    #[must_use]
    pub const fn inch(value: f64) -> Self {
        Self::new(value, UnitKind::Inch)
    }

    /// Create a relative length where one unit spans `base_per_unit`
    /// graphic units.
    #[must_use]
    pub const fn scaled(value: f64, base_per_unit: f64) -> Self {
        Self::new(value, UnitKind::Scaled { base_per_unit })
    }

    /// The magnitude in this length's own kind.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The kind this length is expressed in.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        self.kind
    }

    /// The magnitude in canonical graphic units.
    #[must_use]
    pub fn base_value(self) -> f64 {
        self.value * self.kind.base_per_unit()
    }

    /// The same length re-expressed in another kind.
    #[must_use]
    pub fn to_kind(self, kind: UnitKind) -> Self {
        Self::new(self.base_value() / kind.base_per_unit(), kind)
    }

    fn from_base(base: f64, kind: UnitKind) -> Self {
        Self::new(base / kind.base_per_unit(), kind)
    }

    /// Equality within [`DEFAULT_TOLERANCE`] graphic units.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_within(other, DEFAULT_TOLERANCE)
    }

    /// Equality within `tolerance` graphic units.
    #[must_use]
    pub fn approx_eq_within(self, other: Self, tolerance: f64) -> bool {
        (self.base_value() - other.base_value()).abs() <= tolerance
    }

    /// The absolute length, keeping the kind.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.kind)
    }

    /// The smaller of two lengths.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two lengths.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Whether the length is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.base_value() < 0.0
    }

    /// Whether the length is strictly above zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.base_value() > 0.0
    }

    /// Whether the length is exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        self.base_value() == 0.0
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Unit {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.base_value() == other.base_value()
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.kind)
    }
}

impl Add for Unit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.base_value() + rhs.base_value(), self.kind)
    }
}

impl Sub for Unit {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.base_value() - rhs.base_value(), self.kind)
    }
}

impl AddAssign for Unit {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Unit {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Unit {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.kind)
    }
}

impl Mul<f64> for Unit {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.kind)
    }
}

impl Div<f64> for Unit {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.kind)
    }
}

/// Dividing two lengths gives a dimensionless ratio.
impl Div for Unit {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.base_value() / rhs.base_value()
    }
}

impl Sum for Unit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_kinds_normalize_to_base() {
        let staff_space = Unit::scaled(1.0, 1.75);
        let sum = Unit::graphic(1.0) + staff_space * 2.0;
        assert!(sum.approx_eq(Unit::graphic(4.5)));
        assert_eq!(sum.kind(), UnitKind::Graphic);
    }

    #[test]
    fn result_takes_left_kind() {
        let sum = Unit::mm(10.0) + Unit::inch(1.0);
        assert_eq!(sum.kind(), UnitKind::Mm);
        assert!((sum.value() - 35.4).abs() < 1e-9);
    }

    #[test]
    fn display_uses_kind_suffix() {
        assert_eq!(Unit::mm(10.0).to_string(), "10mm");
        assert_eq!(Unit::graphic(2.5).to_string(), "2.5gu");
        assert_eq!(Unit::scaled(3.0, 2.0).to_string(), "3su");
    }

    #[test]
    fn ordering_compares_base_values() {
        assert!(Unit::mm(1.0) < Unit::graphic(3.0));
        assert!(Unit::inch(1.0) > Unit::mm(25.0));
        assert_eq!(Unit::pt(72.0), Unit::inch(1.0));
    }
}
