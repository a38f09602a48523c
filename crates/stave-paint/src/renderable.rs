//! Per-type render operations.
//!
//! Every drawable node type implements [`Renderable`]. Drawing a whole
//! object is mandatory; the three partial operations used when an object is
//! split across line breaks default to [`RenderError::Unsupported`], so a
//! type only opts in to splitting by overriding them.

use stave_geometry::{PagePoint, Unit};
use stave_scene::{Brush, Document, NodeId, Path, Pen, Segment, SegmentHandle, SegmentKind, Style, Text};

use crate::backend::{DrawPath, DrawText, RenderBackend};
use crate::clip::Clip;
use crate::error::RenderError;

/// What a render operation needs to know about the node it draws, plus the
/// backend to draw on.
pub struct RenderContext<'a> {
    node: NodeId,
    pen: Pen,
    brush: Brush,
    document: &'a Document,
    backend: &'a mut dyn RenderBackend,
}

impl<'a> RenderContext<'a> {
    /// Create a context for `node`. Missing pen or brush fall back to the
    /// document's configured defaults.
    #[must_use]
    pub fn new(node: NodeId, style: Style, document: &'a Document, backend: &'a mut dyn RenderBackend) -> Self {
        let config = document.config();
        Self {
            node,
            pen: style.pen.unwrap_or(config.default_pen),
            brush: style.brush.unwrap_or(config.default_brush),
            document,
            backend,
        }
    }

    /// The node being drawn.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// The resolved pen.
    #[must_use]
    pub const fn pen(&self) -> Pen {
        self.pen
    }

    /// The resolved brush.
    #[must_use]
    pub const fn brush(&self) -> Brush {
        self.brush
    }

    /// The document being drawn.
    #[must_use]
    pub const fn document(&self) -> &Document {
        self.document
    }

    /// The backend to draw on.
    pub fn backend(&mut self) -> &mut dyn RenderBackend {
        &mut *self.backend
    }

    fn unsupported(&self, operation: SegmentKind) -> RenderError {
        RenderError::Unsupported {
            node: self.node,
            operation,
        }
    }
}

/// Drawing operations of a node type.
///
/// `start` and `stop` are absolute document positions of the segment's
/// ends. `local_start_x` is how far into the object's breakable width the
/// segment begins.
pub trait Renderable {
    /// Draw the whole object at `pos`.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the object cannot be drawn.
    fn render_complete(&self, ctx: &mut RenderContext<'_>, pos: PagePoint) -> Result<SegmentHandle, RenderError>;

    /// Draw the part of the object before its first line break.
    ///
    /// # Errors
    ///
    /// [`RenderError::Unsupported`] unless overridden.
    fn render_before_break(
        &self,
        ctx: &mut RenderContext<'_>,
        _local_start_x: Unit,
        _start: PagePoint,
        _stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Err(ctx.unsupported(SegmentKind::BeforeBreak))
    }

    /// Draw the part of the object after its last line break.
    ///
    /// # Errors
    ///
    /// [`RenderError::Unsupported`] unless overridden.
    fn render_after_break(
        &self,
        ctx: &mut RenderContext<'_>,
        _local_start_x: Unit,
        _start: PagePoint,
        _stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Err(ctx.unsupported(SegmentKind::AfterBreak))
    }

    /// Draw a full line crossed by the object.
    ///
    /// # Errors
    ///
    /// [`RenderError::Unsupported`] unless overridden.
    fn render_spanning_continuation(
        &self,
        ctx: &mut RenderContext<'_>,
        _local_start_x: Unit,
        _start: PagePoint,
        _stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Err(ctx.unsupported(SegmentKind::SpanningContinuation))
    }
}

fn draw_path(
    path: &Path,
    ctx: &mut RenderContext<'_>,
    segment: SegmentKind,
    pos: PagePoint,
    clip: Option<Clip>,
) -> SegmentHandle {
    let command = DrawPath {
        node: ctx.node(),
        segment,
        pos,
        canvas_pos: ctx.document().canvas_pos(pos),
        path: path.clone(),
        pen: ctx.pen(),
        brush: ctx.brush(),
        clip,
    };
    ctx.backend().draw_path(&command)
}

/// Draw the band `[local_start_x, local_start_x + width)` of a path with the
/// band's left edge at `start`.
fn draw_path_slice(
    path: &Path,
    ctx: &mut RenderContext<'_>,
    segment: SegmentKind,
    local_start_x: Unit,
    start: PagePoint,
    stop: PagePoint,
) -> SegmentHandle {
    let clip = Clip::horizontal(
        path.bounding_rect(),
        Some(local_start_x),
        Some(stop.x - start.x),
        ctx.pen().thickness,
    );
    draw_path(path, ctx, segment, start, Some(clip))
}

impl Renderable for Path {
    fn render_complete(&self, ctx: &mut RenderContext<'_>, pos: PagePoint) -> Result<SegmentHandle, RenderError> {
        Ok(draw_path(self, ctx, SegmentKind::Complete, pos, None))
    }

    fn render_before_break(
        &self,
        ctx: &mut RenderContext<'_>,
        local_start_x: Unit,
        start: PagePoint,
        stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Ok(draw_path_slice(self, ctx, SegmentKind::BeforeBreak, local_start_x, start, stop))
    }

    fn render_after_break(
        &self,
        ctx: &mut RenderContext<'_>,
        local_start_x: Unit,
        start: PagePoint,
        stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Ok(draw_path_slice(self, ctx, SegmentKind::AfterBreak, local_start_x, start, stop))
    }

    fn render_spanning_continuation(
        &self,
        ctx: &mut RenderContext<'_>,
        local_start_x: Unit,
        start: PagePoint,
        stop: PagePoint,
    ) -> Result<SegmentHandle, RenderError> {
        Ok(draw_path_slice(
            self,
            ctx,
            SegmentKind::SpanningContinuation,
            local_start_x,
            start,
            stop,
        ))
    }
}

// Text has no glyph metrics to slice by, so it only draws whole.
impl Renderable for Text {
    fn render_complete(&self, ctx: &mut RenderContext<'_>, pos: PagePoint) -> Result<SegmentHandle, RenderError> {
        let command = DrawText {
            node: ctx.node(),
            pos,
            canvas_pos: ctx.document().canvas_pos(pos),
            text: self.clone(),
            pen: ctx.pen(),
            brush: ctx.brush(),
        };
        Ok(ctx.backend().draw_text(&command))
    }
}

/// Dispatch one planned segment to the matching render operation.
///
/// # Errors
///
/// Whatever the operation returns.
pub fn dispatch(
    renderable: &dyn Renderable,
    ctx: &mut RenderContext<'_>,
    segment: &Segment,
) -> Result<SegmentHandle, RenderError> {
    match segment.kind {
        SegmentKind::Complete => renderable.render_complete(ctx, segment.start),
        SegmentKind::BeforeBreak => {
            renderable.render_before_break(ctx, segment.local_start_x, segment.start, segment.end)
        }
        SegmentKind::SpanningContinuation => {
            renderable.render_spanning_continuation(ctx, segment.local_start_x, segment.start, segment.end)
        }
        SegmentKind::AfterBreak => {
            renderable.render_after_break(ctx, segment.local_start_x, segment.start, segment.end)
        }
    }
}
