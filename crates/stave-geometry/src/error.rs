//! Geometry errors.

use thiserror::Error;

/// Errors raised by geometric operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Two anchored points with different anchors were combined.
    #[error("cannot combine points anchored to {left} and {right}")]
    MismatchedAnchors {
        /// Debug rendering of the left operand's anchor.
        left: String,
        /// Debug rendering of the right operand's anchor.
        right: String,
    },
}
