//! Rendering for the stave layout engine.
//!
//! # Architecture
//!
//! Painting is separate from layout and from the surface that finally
//! draws pixels:
//!
//! ```text
//! SceneTree -> plan_segments -> Renderable -> RenderBackend
//!                                                  |
//!                                             DisplayList
//! ```
//!
//! [`Painter`] walks the tree, [`Renderable`] turns each planned segment into
//! a draw request, and any [`RenderBackend`] carries it out. The bundled
//! [`DisplayList`] backend only records the requests, which is what tests
//! and debugging dumps need.

mod backend;
mod clip;
mod display_list;
mod error;
mod painter;
mod renderable;

pub use backend::{DrawPath, DrawText, RenderBackend};
pub use clip::{Clip, clipping_area};
pub use display_list::{DisplayCommand, DisplayList};
pub use error::RenderError;
pub use painter::Painter;
pub use renderable::{RenderContext, Renderable, dispatch};

use stave_scene::SceneTree;

/// Render the whole tree into a fresh display list.
///
/// # Errors
///
/// See [`Painter::render`].
pub fn paint(tree: &mut SceneTree) -> Result<DisplayList, RenderError> {
    let mut list = DisplayList::new();
    let root = tree.root();
    Painter::new(&mut list).render(tree, root)?;
    Ok(list)
}
