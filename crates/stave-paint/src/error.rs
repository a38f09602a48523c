//! Rendering errors.

use stave_scene::{NodeId, SceneError, SegmentKind};
use thiserror::Error;

/// Errors raised while rendering a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The node's type cannot draw this kind of segment.
    #[error("node {node:?} cannot render a {operation} segment")]
    Unsupported {
        /// The node being drawn.
        node: NodeId,
        /// The segment kind it was asked to draw.
        operation: SegmentKind,
    },

    /// Planning or tree access failed.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// A display list could not be serialized.
    #[error("failed to serialize display list: {0}")]
    Serialize(#[from] serde_json::Error),
}
