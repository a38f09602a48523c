//! Arena-backed scene graph.
//!
//! # Design
//!
//! All nodes live in one vector indexed by [`NodeId`]. The document node is
//! created with the tree at [`NodeId::ROOT`] and every later node is inserted
//! under an explicit parent, so there is no implicit global document. Removed
//! nodes leave a tombstone behind and their ids are never reused.

use stave_geometry::{PagePoint, Point};

use crate::document::Document;
use crate::error::SceneError;
use crate::frame::{Frame, LayoutController, generate_controllers};
use crate::node::{Node, NodeClass, NodeId, NodeKind, SegmentHandle};

/// The scene graph of one layout session.
#[derive(Debug, Clone)]
pub struct SceneTree {
    document: Document,
    /// Indexed by `NodeId`. `None` marks a removed node.
    nodes: Vec<Option<Node>>,
}

impl SceneTree {
    /// Create a tree holding only the document node.
    #[must_use]
    pub fn new(document: Document) -> Self {
        let root = Node::new(NodeKind::Document, PagePoint::ORIGIN);
        Self {
            document,
            nodes: vec![Some(root)],
        }
    }

    /// The document this tree lays out.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of live nodes, the document node included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Whether the tree has no live nodes. Never true in practice since the
    /// document node cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a node by its id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Get a mutable reference to a node by its id.
    ///
    /// Structural fields are not reachable through this reference; use
    /// [`SceneTree::set_parent`] to move nodes.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Get a node, failing for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] if no live node has this id.
    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Register `node` as a child of `parent` and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] if `parent` does not exist.
    pub fn insert(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, SceneError> {
        let id = NodeId(self.nodes.len());
        self.node_mut(parent)?.children.push(id);
        node.parent = Some(parent);
        node.children.clear();
        node.rendered.clear();
        self.nodes.push(Some(node));
        Ok(id)
    }

    /// Move `node` under `new_parent`.
    ///
    /// The move is checked before anything changes: on error the tree is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`SceneError::RootNode`] if `node` is the document node.
    /// - [`SceneError::UnknownNode`] if either node does not exist.
    /// - [`SceneError::InvalidParent`] if `new_parent` is `node` itself or
    ///   one of its descendants.
    pub fn set_parent(&mut self, node: NodeId, new_parent: NodeId) -> Result<(), SceneError> {
        if node == NodeId::ROOT {
            return Err(SceneError::RootNode);
        }
        let old_parent = self.node(node)?.parent;
        let _ = self.node(new_parent)?;
        if new_parent == node || self.is_descendant_of(new_parent, node) {
            return Err(SceneError::InvalidParent {
                node,
                parent: new_parent,
            });
        }

        if let Some(old) = old_parent {
            self.node_mut(old)?.children.retain(|&child| child != node);
        }
        self.node_mut(new_parent)?.children.push(node);
        self.node_mut(node)?.parent = Some(new_parent);
        Ok(())
    }

    /// Detach `node` and drop it together with its whole subtree.
    ///
    /// Returns the removed node. Its `children` still name the ids it had,
    /// but those ids no longer resolve.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::RootNode`] for the document node and
    /// [`SceneError::UnknownNode`] if `node` does not exist.
    pub fn remove(&mut self, node: NodeId) -> Result<Node, SceneError> {
        if node == NodeId::ROOT {
            return Err(SceneError::RootNode);
        }
        let parent = self.node(node)?.parent;
        let subtree: Vec<NodeId> = self.descendants(node).collect();
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|&child| child != node);
        }
        for id in subtree {
            if let Some(slot) = self.nodes.get_mut(id.0) {
                *slot = None;
            }
        }
        let mut removed = self
            .nodes
            .get_mut(node.0)
            .and_then(Option::take)
            .ok_or(SceneError::UnknownNode(node))?;
        removed.parent = None;
        Ok(removed)
    }

    /// The parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// The children of a node, empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], Node::children)
    }

    /// Iterate over the ancestors of a node, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Whether `descendant` lies strictly below `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate lazily over every descendant of `id`.
    ///
    /// For each child in turn, the child's own descendants come first and
    /// then the child itself. `id` is not included. Each call starts a fresh
    /// traversal.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.get(id).is_some() { vec![(id, 0)] } else { Vec::new() };
        Descendants { tree: self, stack }
    }

    /// Descendants belonging to `class` or one of its subclasses.
    pub fn descendants_of_type(&self, id: NodeId, class: NodeClass) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id)
            .filter(move |&d| self.get(d).is_some_and(|node| node.kind.is_a(class)))
    }

    /// Descendants whose class is exactly `class`.
    pub fn descendants_of_exact_type(&self, id: NodeId, class: NodeClass) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id)
            .filter(move |&d| self.get(d).is_some_and(|node| node.class() == class))
    }

    /// The nearest frame above `id`, if any.
    #[must_use]
    pub fn frame_of(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|&a| self.get(a).is_some_and(|node| node.class() == NodeClass::Frame))
    }

    /// Whether `id` lives inside a frame.
    #[must_use]
    pub fn is_in_flowable(&self, id: NodeId) -> bool {
        self.frame_of(id).is_some()
    }

    /// The frame payload of a frame node.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] or [`SceneError::NotAFrame`].
    pub fn frame(&self, id: NodeId) -> Result<&Frame, SceneError> {
        self.node(id)?.as_frame().ok_or(SceneError::NotAFrame(id))
    }

    fn frame_mut(&mut self, id: NodeId) -> Result<&mut Frame, SceneError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Frame(frame) => Ok(frame),
            _ => Err(SceneError::NotAFrame(id)),
        }
    }

    /// Position of `node` in the local space of `frame`: the sum of local
    /// positions from `node` up to, but excluding, the frame.
    ///
    /// # Errors
    ///
    /// - [`SceneError::NotAFrame`] if `frame` is not a frame.
    /// - [`SceneError::NotInFrame`] if `frame` is not an ancestor of `node`.
    pub fn local_position_in_frame(&self, frame: NodeId, node: NodeId) -> Result<Point, SceneError> {
        let _ = self.frame(frame)?;
        let mut sum = self.node(node)?.local_point();
        for ancestor in self.ancestors(node) {
            if ancestor == frame {
                return Ok(sum);
            }
            sum = sum + self.node(ancestor)?.local_point();
        }
        Err(SceneError::NotInFrame { node, frame })
    }

    /// Absolute document position of a node.
    ///
    /// Outside frames this is the sum of positions up to the root, pages
    /// included. Inside a frame the position accumulated up to the frame is
    /// frame-local and is mapped through the frame's line layout instead.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] for unknown ids and
    /// [`SceneError::OutOfBounds`] if the node lies outside its frame's
    /// layout.
    pub fn absolute_position(&self, id: NodeId) -> Result<PagePoint, SceneError> {
        let mut sum = PagePoint::ORIGIN;
        let mut current = id;
        loop {
            let node = self.node(current)?;
            sum = sum + node.pos;
            let Some(parent) = node.parent else {
                return Ok(sum);
            };
            if let Some(frame) = self.node(parent)?.as_frame() {
                return frame.map_local_to_absolute(sum.point());
            }
            current = parent;
        }
    }

    /// Position of `destination` relative to `source`, page delta included.
    ///
    /// `map_between(a, b)` is always the negation of `map_between(b, a)`.
    ///
    /// # Errors
    ///
    /// See [`SceneTree::absolute_position`].
    pub fn map_between(&self, source: NodeId, destination: NodeId) -> Result<PagePoint, SceneError> {
        Ok(self.absolute_position(destination)? - self.absolute_position(source)?)
    }

    /// Lay out a frame's lines from the document's page metrics.
    ///
    /// # Errors
    ///
    /// - [`SceneError::NotAFrame`] if `frame` is not a frame.
    /// - [`SceneError::InvalidLayout`] if the frame sits inside another frame
    ///   or the page metrics leave no room for it.
    pub fn layout_frame(&mut self, frame: NodeId) -> Result<(), SceneError> {
        let (width, height, y_padding) = {
            let f = self.frame(frame)?;
            (f.width, f.height, f.y_padding)
        };
        if let Some(outer) = self.frame_of(frame) {
            return Err(SceneError::InvalidLayout(format!(
                "frame {frame:?} is nested inside frame {outer:?}"
            )));
        }
        let start = self.absolute_position(frame)?;
        let controllers = generate_controllers(start, width, height, y_padding, &self.document)?;
        log::debug!(
            target: "stave::frame",
            "laid out frame {frame:?} in {} lines from {start}",
            controllers.len()
        );
        self.frame_mut(frame)?.set_controllers(controllers)
    }

    /// Replace a frame's line layout with explicit controllers.
    ///
    /// # Errors
    ///
    /// [`SceneError::NotAFrame`] or [`SceneError::InvalidLayout`].
    pub fn set_controllers(&mut self, frame: NodeId, controllers: Vec<LayoutController>) -> Result<(), SceneError> {
        self.frame_mut(frame)?.set_controllers(controllers)
    }

    /// Replace the segment handles recorded for a node.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownNode`] if the node does not exist.
    pub fn record_segments(&mut self, id: NodeId, handles: Vec<SegmentHandle>) -> Result<(), SceneError> {
        self.node_mut(id)?.rendered = handles;
        Ok(())
    }

    /// Segment handles from the last render of a node, empty for unknown ids.
    #[must_use]
    pub fn rendered(&self, id: NodeId) -> &[SegmentHandle] {
        self.get(id).map_or(&[], Node::rendered)
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'a> {
    tree: &'a SceneTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Lazy post-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    tree: &'a SceneTree,
    /// Path from the starting node down to the node being expanded, each
    /// with the index of its next unvisited child.
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, next_child) = self.stack.last_mut()?;
            if let Some(&child) = self.tree.children(*id).get(*next_child) {
                *next_child += 1;
                self.stack.push((child, 0));
                continue;
            }
            let (done, _) = self.stack.pop()?;
            // The starting node is the last one popped and is not yielded.
            return if self.stack.is_empty() { None } else { Some(done) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_only_the_document() {
        let tree = SceneTree::default();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).unwrap().class(), NodeClass::Document);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.descendants(tree.root()).count(), 0);
    }

    #[test]
    fn descendants_of_unknown_node_is_empty() {
        let tree = SceneTree::default();
        assert_eq!(tree.descendants(NodeId(42)).count(), 0);
    }
}
