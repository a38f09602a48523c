//! Scene nodes.
//!
//! # Design
//!
//! Nodes live in the [`SceneTree`](crate::SceneTree) arena and refer to each
//! other through [`NodeId`] indices. A node owns exactly one parent edge; the
//! children list is a derived index that only the tree mutates, so the two
//! can never disagree.

use serde::{Deserialize, Serialize};
use stave_geometry::{PagePoint, Point, Unit};
use strum_macros::Display;

use crate::frame::Frame;
use crate::shape::{Path, Text};
use crate::style::{Brush, Pen, Style};

/// A type-safe index into the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// Opaque handle to one drawn segment, issued by a rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentHandle(pub usize);

/// What a node is, and the payload that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The document root. Exactly one per tree.
    Document,
    /// A plain positioned object. Draws nothing but offsets its children.
    Group,
    /// A flowable frame that wraps its descendants across line breaks.
    Frame(Frame),
    /// A vector path.
    Path(Path),
    /// A run of text.
    Text(Text),
}

impl NodeKind {
    /// The exact class tag of this kind.
    #[must_use]
    pub const fn class(&self) -> NodeClass {
        match self {
            Self::Document => NodeClass::Document,
            Self::Group => NodeClass::Group,
            Self::Frame(_) => NodeClass::Frame,
            Self::Path(_) => NodeClass::Path,
            Self::Text(_) => NodeClass::Text,
        }
    }

    /// Whether this kind belongs to `class` or one of its subclasses.
    ///
    /// ```
    /// use stave_scene::{NodeClass, NodeKind, Path};
    ///
    /// let kind = NodeKind::Path(Path::new());
    /// assert!(kind.is_a(NodeClass::Graphic));
    /// assert!(kind.is_a(NodeClass::Positioned));
    /// assert!(!kind.is_a(NodeClass::Text));
    /// ```
    #[must_use]
    pub const fn is_a(&self, class: NodeClass) -> bool {
        let exact = self.class();
        match class {
            NodeClass::Positioned => true,
            NodeClass::Graphic => matches!(exact, NodeClass::Path | NodeClass::Text),
            NodeClass::Document => matches!(exact, NodeClass::Document),
            NodeClass::Group => matches!(exact, NodeClass::Group),
            NodeClass::Frame => matches!(exact, NodeClass::Frame),
            NodeClass::Path => matches!(exact, NodeClass::Path),
            NodeClass::Text => matches!(exact, NodeClass::Text),
        }
    }
}

/// Class tags used for type-filtered traversal.
///
/// `Positioned` contains every node and `Graphic` contains paths and text.
/// The remaining tags are leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeClass {
    /// Every node.
    Positioned,
    /// Nodes that draw something.
    Graphic,
    /// The document root.
    Document,
    /// Plain groups.
    Group,
    /// Flowable frames.
    Frame,
    /// Paths.
    Path,
    /// Text runs.
    Text,
}

/// A positioned object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What the node is.
    pub kind: NodeKind,

    /// Position relative to the parent. The page component only matters
    /// outside frames, where it is summed along the parent chain.
    pub pos: PagePoint,

    /// Horizontal extent used when splitting across line breaks.
    pub breakable_width: Unit,

    /// Drawing attributes handed to the backend.
    pub style: Style,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) rendered: Vec<SegmentHandle>,
}

impl Node {
    /// A detached node of the given kind at `pos`.
    #[must_use]
    pub fn new(kind: NodeKind, pos: PagePoint) -> Self {
        Self {
            kind,
            pos,
            breakable_width: Unit::ZERO,
            style: Style::default(),
            parent: None,
            children: Vec::new(),
            rendered: Vec::new(),
        }
    }

    /// A group at `pos`.
    #[must_use]
    pub fn group(pos: impl Into<PagePoint>) -> Self {
        Self::new(NodeKind::Group, pos.into())
    }

    /// A path at `pos`. The breakable width defaults to the path's extent.
    #[must_use]
    pub fn path(pos: impl Into<PagePoint>, path: Path) -> Self {
        let width = path.extent();
        Self::new(NodeKind::Path(path), pos.into()).with_breakable_width(width)
    }

    /// A text run at `pos`.
    #[must_use]
    pub fn text(pos: impl Into<PagePoint>, text: Text) -> Self {
        Self::new(NodeKind::Text(text), pos.into())
    }

    /// A frame at `pos`.
    #[must_use]
    pub fn frame(pos: impl Into<PagePoint>, frame: Frame) -> Self {
        Self::new(NodeKind::Frame(frame), pos.into())
    }

    /// Replace the breakable width.
    #[must_use]
    pub const fn with_breakable_width(mut self, width: Unit) -> Self {
        self.breakable_width = width;
        self
    }

    /// Set the outline pen.
    #[must_use]
    pub const fn with_pen(mut self, pen: Pen) -> Self {
        self.style.pen = Some(pen);
        self
    }

    /// Set the fill brush.
    #[must_use]
    pub const fn with_brush(mut self, brush: Brush) -> Self {
        self.style.brush = Some(brush);
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The parent, `None` for the document root and detached nodes.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order. Callers must not rely on the order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Segment handles from the most recent render pass.
    #[must_use]
    pub fn rendered(&self) -> &[SegmentHandle] {
        &self.rendered
    }

    /// The exact class of this node.
    #[must_use]
    pub const fn class(&self) -> NodeClass {
        self.kind.class()
    }

    /// The frame payload, if this node is a frame.
    #[must_use]
    pub const fn as_frame(&self) -> Option<&Frame> {
        match &self.kind {
            NodeKind::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    /// Position without its page component.
    #[must_use]
    pub const fn local_point(&self) -> Point {
        self.pos.point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_node_takes_extent_as_breakable_width() {
        let node = Node::path(Point::graphic(5.0, 5.0), Path::straight_line(Point::graphic(40.0, 0.0)));
        assert_eq!(node.breakable_width, Unit::graphic(40.0));
        assert_eq!(node.class(), NodeClass::Path);
    }

    #[test]
    fn class_hierarchy() {
        assert!(NodeKind::Text(Text::new("a", Unit::pt(12.0))).is_a(NodeClass::Graphic));
        assert!(!NodeKind::Group.is_a(NodeClass::Graphic));
        assert!(NodeKind::Document.is_a(NodeClass::Positioned));
        assert!(!NodeKind::Group.is_a(NodeClass::Frame));
        assert_eq!(NodeClass::Graphic.to_string(), "Graphic");
    }
}
