//! Shape payloads carried by scene nodes.
//!
//! Shape geometry is expressed relative to the owning node's position; the
//! painter translates it to absolute page space when dispatching.

use serde::{Deserialize, Serialize};
use stave_geometry::{Point, Rect, Unit};

/// One drawing instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    /// Start a new subpath at a point.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Cubic bezier curve.
    CurveTo {
        /// First control point.
        control_1: Point,
        /// Second control point.
        control_2: Point,
        /// End point.
        end: Point,
    },
    /// Close the current subpath back to its start.
    Close,
}

/// A vector path in node-local coordinates.
///
/// Paths implicitly start at the node origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// An empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// A straight line from the origin to `end`.
    #[must_use]
    pub fn straight_line(end: Point) -> Self {
        let mut path = Self::new();
        path.line_to(end);
        path
    }

    /// A closed rectangle with its top-left corner at the origin.
    #[must_use]
    pub fn rect(width: Unit, height: Unit) -> Self {
        let mut path = Self::new();
        path.line_to(Point::new(width, Unit::ZERO));
        path.line_to(Point::new(width, height));
        path.line_to(Point::new(Unit::ZERO, height));
        path.close_subpath();
        path
    }

    /// Append a straight line.
    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    /// Append a cubic bezier curve.
    pub fn cubic_to(&mut self, control_1: Point, control_2: Point, end: Point) {
        self.elements.push(PathElement::CurveTo {
            control_1,
            control_2,
            end,
        });
    }

    /// Close the current subpath.
    pub fn close_subpath(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// The path's elements in drawing order.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The pen position after the last element.
    ///
    /// Closing a subpath returns the pen to where that subpath started.
    #[must_use]
    pub fn current_position(&self) -> Point {
        let mut subpath_start = Point::ORIGIN;
        let mut current = Point::ORIGIN;
        for element in &self.elements {
            match *element {
                PathElement::MoveTo(p) => {
                    subpath_start = p;
                    current = p;
                }
                PathElement::LineTo(p) | PathElement::CurveTo { end: p, .. } => current = p,
                PathElement::Close => current = subpath_start,
            }
        }
        current
    }

    /// The bounding box of every point the path mentions, control points
    /// included. Always contains the origin.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let points = self.elements.iter().flat_map(|element| match *element {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => vec![p],
            PathElement::CurveTo {
                control_1,
                control_2,
                end,
            } => vec![control_1, control_2, end],
            PathElement::Close => Vec::new(),
        });
        Rect::from_points(std::iter::once(Point::ORIGIN).chain(points)).unwrap_or_default()
    }

    /// Horizontal extent to the right of the origin. This is the default
    /// breakable width of a path node.
    #[must_use]
    pub fn extent(&self) -> Unit {
        self.bounding_rect().right().max(Unit::ZERO)
    }
}

/// A run of text. Glyph metrics are the backend's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text content.
    pub text: String,
    /// Font size.
    pub font_size: Unit,
}

impl Text {
    /// Create a text run.
    #[must_use]
    pub fn new(text: impl Into<String>, font_size: Unit) -> Self {
        Self {
            text: text.into(),
            font_size,
        }
    }
}
