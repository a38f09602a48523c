//! Horizontal path clipping.
//!
//! A path split across line breaks is drawn once per segment, each time
//! showing only a vertical band of the full shape. The band is expressed in
//! the path's own coordinates and the painter shifts it so the band starts
//! at the segment's start position.

use serde::{Deserialize, Serialize};
use stave_geometry::{Point, Rect, Unit};

/// The visible band of a path and the translation that places it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Visible region in path-local coordinates.
    pub rect: Rect,
    /// Translation applied before drawing, so that the band's left edge
    /// lands on the drawing origin.
    pub offset: Point,
}

impl Clip {
    /// Clip a shape with bounding box `bounds` to a band starting at
    /// `start_x` and `width` wide, padded on every side by `padding` so thick
    /// strokes are not cut.
    ///
    /// `None` for `start_x` begins the band at the shape's left edge, `None`
    /// for `width` runs it to the shape's right edge.
    #[must_use]
    pub fn horizontal(bounds: Rect, start_x: Option<Unit>, width: Option<Unit>, padding: Unit) -> Self {
        Self {
            rect: clipping_area(bounds, start_x, width, padding),
            offset: Point::new(start_x.map_or(Unit::ZERO, |x| -x), Unit::ZERO),
        }
    }

    /// The band in drawing coordinates, after the offset is applied.
    #[must_use]
    pub fn placed_rect(&self) -> Rect {
        self.rect.translate(self.offset)
    }
}

/// The painting area for a horizontal slice of a shape.
#[must_use]
pub fn clipping_area(bounds: Rect, start_x: Option<Unit>, width: Option<Unit>, padding: Unit) -> Rect {
    let start_x = start_x.unwrap_or(bounds.x);
    let width = width.unwrap_or_else(|| bounds.width - (start_x - bounds.x));
    Rect::new(start_x, bounds.y, width, bounds.height).inflate(padding)
}
