//! Break splitting.
//!
//! An object inside a frame has a breakable width starting at its
//! frame-local x position. When that width runs past the end of the line it
//! starts on, the object is drawn as several segments: the part before the
//! break, one full-line continuation for every line it crosses entirely, and
//! the part after the last break.
//!
//! Planning is pure. It reads the tree and returns the segments to draw, or
//! an error before anything has been drawn.

use serde::{Deserialize, Serialize};
use stave_geometry::{PagePoint, Point, Unit};
use strum_macros::Display;

use crate::error::SceneError;
use crate::node::NodeId;
use crate::tree::SceneTree;

/// Which part of a split object a segment draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum SegmentKind {
    /// The whole object, no break involved.
    Complete,
    /// From the object's start to the end of its first line.
    BeforeBreak,
    /// A full line crossed by the object.
    SpanningContinuation,
    /// From the start of the last line to the object's end.
    AfterBreak,
}

/// One drawing call planned for a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Which part of the object this is.
    pub kind: SegmentKind,
    /// Offset into the object's breakable width where this segment begins.
    pub local_start_x: Unit,
    /// Absolute document position where the segment starts.
    pub start: PagePoint,
    /// Absolute document position where the segment stops.
    pub end: PagePoint,
}

impl Segment {
    fn horizontal(kind: SegmentKind, local_start_x: Unit, start: PagePoint, width: Unit) -> Self {
        Self {
            kind,
            local_start_x,
            start,
            end: start.offset(Point::new(width, Unit::ZERO)),
        }
    }

    /// Horizontal length covered by the segment.
    #[must_use]
    pub fn width(&self) -> Unit {
        self.end.x - self.start.x
    }
}

/// Plan the segments needed to draw node `id`.
///
/// Nodes outside frames, nodes with no breakable width and nodes that fit on
/// their line get a single [`SegmentKind::Complete`] segment at their
/// absolute position. Otherwise the result is one
/// [`SegmentKind::BeforeBreak`] segment, zero or more
/// [`SegmentKind::SpanningContinuation`] segments and one
/// [`SegmentKind::AfterBreak`] segment, whose widths add up to the breakable
/// width. The before-break segment is kept even when it has zero width.
///
/// # Errors
///
/// - [`SceneError::UnknownNode`] if `id` does not exist.
/// - [`SceneError::OutOfBounds`] if the node starts outside its frame's
///   layout or its breakable width runs past the frame's last line.
pub fn plan_segments(tree: &SceneTree, id: NodeId) -> Result<Vec<Segment>, SceneError> {
    let width = tree.node(id)?.breakable_width;
    let Some(frame_id) = tree.frame_of(id) else {
        let start = tree.absolute_position(id)?;
        return Ok(vec![Segment::horizontal(SegmentKind::Complete, Unit::ZERO, start, width)]);
    };

    let frame = tree.frame(frame_id)?;
    let local = tree.local_position_in_frame(frame_id, id)?;
    let dist_to_line_end = frame.dist_to_line_end(local.x)?;
    let mut remaining = width + dist_to_line_end;
    let start = tree.absolute_position(id)?;

    // Objects ending within float noise of the line end still fit.
    if width.is_zero() || !remaining.is_positive() || remaining.approx_eq(Unit::ZERO) {
        return Ok(vec![Segment::horizontal(SegmentKind::Complete, Unit::ZERO, start, width)]);
    }

    let first_line = frame.line_index_containing(local.x)?;
    let flowable_length = frame.flowable_length();
    if local.x + width > flowable_length && !(local.x + width).approx_eq(flowable_length) {
        return Err(SceneError::OutOfBounds {
            x: local.x + width,
            length: flowable_length,
        });
    }

    let mut segments = vec![Segment::horizontal(
        SegmentKind::BeforeBreak,
        Unit::ZERO,
        start,
        -dist_to_line_end,
    )];

    let mut last_line = frame.line_containing(local.x)?;
    for line in frame.controllers().iter().skip(first_line + 1) {
        last_line = line;
        if remaining <= line.length || remaining.approx_eq(line.length) {
            break;
        }
        segments.push(Segment::horizontal(
            SegmentKind::SpanningContinuation,
            width - remaining,
            line.pos.offset(Point::new(Unit::ZERO, local.y)),
            line.length,
        ));
        remaining -= line.length;
    }

    segments.push(Segment::horizontal(
        SegmentKind::AfterBreak,
        width - remaining,
        last_line.pos.offset(Point::new(Unit::ZERO, local.y)),
        remaining,
    ));

    log::trace!(
        target: "stave::flow",
        "node {id:?} split into {} segments across frame {frame_id:?}",
        segments.len()
    );
    Ok(segments)
}
