//! Geometry primitives for the stave layout engine.
//!
//! # Scope
//!
//! - [`Unit`] - lengths with a fixed conversion to the canonical graphic unit
//! - [`Point`] and [`PagePoint`] - positions, optionally tagged with a page
//! - [`AnchoredPoint`] - positions relative to a scene node
//! - [`Rect`] - bounding boxes and clip regions

pub mod anchored;
pub mod error;
pub mod point;
pub mod rect;
pub mod units;

pub use anchored::AnchoredPoint;
pub use error::GeometryError;
pub use point::{PagePoint, Point};
pub use rect::Rect;
pub use units::{Unit, UnitKind};
