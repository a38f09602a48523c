//! Scene graph and flowable layout for the stave engine.
//!
//! A [`SceneTree`] holds positioned objects in an arena rooted at a
//! [`Document`]. Objects placed inside a [`Frame`] flow along the frame's
//! lines, and [`flow::plan_segments`] works out how an object that crosses
//! line or page breaks is cut into drawable segments.
//!
//! ```
//! use stave_geometry::{PagePoint, Point, Unit};
//! use stave_scene::{Frame, LayoutController, Node, Path, SceneTree, flow};
//!
//! let mut tree = SceneTree::default();
//! let frame = Frame::with_controllers(
//!     Unit::graphic(20.0),
//!     Unit::graphic(10.0),
//!     vec![
//!         LayoutController::new(Unit::ZERO, PagePoint::graphic(0.0, 0.0, 0), Unit::graphic(100.0), Unit::graphic(20.0), Unit::ZERO),
//!         LayoutController::new(Unit::graphic(100.0), PagePoint::graphic(0.0, 50.0, 0), Unit::graphic(80.0), Unit::graphic(20.0), Unit::graphic(10.0)),
//!     ],
//! )?;
//! let frame = tree.insert(tree.root(), Node::frame(Point::ORIGIN, frame))?;
//! let line = Path::straight_line(Point::graphic(40.0, 0.0));
//! let slur = tree.insert(frame, Node::path(Point::graphic(90.0, 0.0), line))?;
//!
//! let segments = flow::plan_segments(&tree, slur)?;
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1].start, PagePoint::graphic(0.0, 50.0, 0));
//! # Ok::<(), stave_scene::SceneError>(())
//! ```

mod config;
mod document;
mod error;
mod frame;
mod node;
mod shape;
mod style;
mod tree;

pub mod flow;

pub use config::SceneConfig;
pub use document::{Document, PageMetrics, Paper};
pub use error::SceneError;
pub use flow::{Segment, SegmentKind};
pub use frame::{Frame, LayoutController, generate_controllers};
pub use node::{Node, NodeClass, NodeId, NodeKind, SegmentHandle};
pub use shape::{Path, PathElement, Text};
pub use style::{Brush, Color, FillPattern, Pen, PenCapStyle, PenJoinStyle, StrokePattern, Style};
pub use tree::{Ancestors, Descendants, SceneTree};
