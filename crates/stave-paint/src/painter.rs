//! Painter - walks the scene tree and dispatches render operations.
//!
//! For each node the painter plans its segments, hands them to the node's
//! [`Renderable`] implementation and records the returned handles on the
//! node. Children are painted after their parent, so the backend receives
//! commands back to front.

use stave_scene::flow::plan_segments;
use stave_scene::{NodeId, NodeKind, SceneTree};

use crate::backend::RenderBackend;
use crate::error::RenderError;
use crate::renderable::{RenderContext, Renderable, dispatch};

/// Painter that draws a scene tree onto a backend.
pub struct Painter<'a> {
    backend: &'a mut dyn RenderBackend,
}

impl<'a> Painter<'a> {
    /// Create a painter drawing onto `backend`.
    #[must_use]
    pub fn new(backend: &'a mut dyn RenderBackend) -> Self {
        Self { backend }
    }

    /// Render `id` and its whole subtree.
    ///
    /// Every node in the subtree loses the handles of its previous render
    /// before anything is drawn. A node whose plan fails is not drawn at all
    /// and the walk stops there, so nodes not reached keep no handles.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Scene`] if planning fails, typically because an
    ///   object runs past the end of its frame.
    /// - [`RenderError::Unsupported`] if a node is split across a break but
    ///   its type can only draw whole.
    pub fn render(&mut self, tree: &mut SceneTree, id: NodeId) -> Result<(), RenderError> {
        let stale: Vec<NodeId> = tree.descendants(id).chain(std::iter::once(id)).collect();
        for node in stale {
            tree.record_segments(node, Vec::new())?;
        }
        self.render_node(tree, id)
    }

    fn render_node(&mut self, tree: &mut SceneTree, id: NodeId) -> Result<(), RenderError> {
        let segments = plan_segments(tree, id)?;

        let handles = {
            let node = tree.node(id)?;
            match renderable_of(&node.kind) {
                Some(renderable) => {
                    let mut ctx = RenderContext::new(id, node.style, tree.document(), &mut *self.backend);
                    segments
                        .iter()
                        .map(|segment| dispatch(renderable, &mut ctx, segment))
                        .collect::<Result<Vec<_>, _>>()?
                }
                None => Vec::new(),
            }
        };
        log::debug!(
            target: "stave::paint",
            "rendered {id:?} as {} of {} planned segments",
            handles.len(),
            segments.len()
        );
        tree.record_segments(id, handles)?;

        let children = tree.children(id).to_vec();
        for child in children {
            self.render_node(tree, child)?;
        }
        Ok(())
    }
}

/// The render operations of a node kind. Groups, frames and the document
/// draw nothing themselves.
fn renderable_of(kind: &NodeKind) -> Option<&dyn Renderable> {
    match kind {
        NodeKind::Path(path) => Some(path),
        NodeKind::Text(text) => Some(text),
        NodeKind::Document | NodeKind::Group | NodeKind::Frame(_) => None,
    }
}
