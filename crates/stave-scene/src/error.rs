//! Scene graph errors.
//!
//! Every variant is a contract violation by the caller. Nothing here is
//! transient, so nothing is retried: the operation that raised the error
//! leaves the tree unchanged.

use stave_geometry::Unit;
use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by scene graph, frame and layout operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Reparenting would make a node its own ancestor.
    #[error("cannot make {parent:?} the parent of {node:?}: it would create a cycle")]
    InvalidParent {
        /// The node being moved.
        node: NodeId,
        /// The rejected new parent.
        parent: NodeId,
    },

    /// The document root cannot be moved or removed.
    #[error("the document root cannot be moved or removed")]
    RootNode,

    /// No live node has this id.
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),

    /// The node was expected to be a frame.
    #[error("node {0:?} is not a frame")]
    NotAFrame(NodeId),

    /// The node does not live inside the given frame.
    #[error("node {node:?} is not inside frame {frame:?}")]
    NotInFrame {
        /// The node being resolved.
        node: NodeId,
        /// The frame it was resolved against.
        frame: NodeId,
    },

    /// A frame-local x position lies outside the frame's flowed range.
    #[error("local x {x} is outside the flowable range [0, {length}]")]
    OutOfBounds {
        /// The requested frame-local x position.
        x: Unit,
        /// The frame's total flowable length.
        length: Unit,
    },

    /// A frame's layout controllers are missing or inconsistent.
    #[error("invalid frame layout: {0}")]
    InvalidLayout(String),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
