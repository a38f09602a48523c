//! The interface to rendering backends.

use serde::{Deserialize, Serialize};
use stave_geometry::{PagePoint, Point};
use stave_scene::{Brush, NodeId, Path, Pen, SegmentHandle, SegmentKind, Text};

use crate::clip::Clip;

/// A request to draw a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPath {
    /// The node being drawn.
    pub node: NodeId,
    /// Which part of the node this draws.
    pub segment: SegmentKind,
    /// Absolute document position of the drawing origin.
    pub pos: PagePoint,
    /// The same position on the shared canvas.
    pub canvas_pos: Point,
    /// The full path, in coordinates relative to the drawing origin.
    pub path: Path,
    /// Resolved outline pen.
    pub pen: Pen,
    /// Resolved fill brush.
    pub brush: Brush,
    /// Visible band for partial segments, `None` to draw everything.
    pub clip: Option<Clip>,
}

/// A request to draw a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawText {
    /// The node being drawn.
    pub node: NodeId,
    /// Absolute document position of the text origin.
    pub pos: PagePoint,
    /// The same position on the shared canvas.
    pub canvas_pos: Point,
    /// The text and its size.
    pub text: Text,
    /// Resolved outline pen.
    pub pen: Pen,
    /// Resolved fill brush.
    pub brush: Brush,
}

/// A drawing surface.
///
/// Each call draws one segment and returns the handle the scene stores for
/// it. Handles only need to be unique within one backend.
pub trait RenderBackend {
    /// Draw a path.
    fn draw_path(&mut self, command: &DrawPath) -> SegmentHandle;

    /// Draw a text run.
    fn draw_text(&mut self, command: &DrawText) -> SegmentHandle;
}
