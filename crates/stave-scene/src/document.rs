//! Documents, paper and page metrics.
//!
//! The layout core never computes page geometry on its own: it asks a
//! [`PageMetrics`] provider for the live area of each page. [`Document`] is
//! the provider used by [`SceneTree`](crate::SceneTree); it is built from a
//! [`SceneConfig`] and lays pages out left to right on a shared canvas.

use serde::{Deserialize, Serialize};
use stave_geometry::{PagePoint, Point, Unit};

use crate::config::SceneConfig;

/// Paper size and margins.
///
/// The *live area* is what remains of the page once margins and the gutter
/// are taken away. Absolute document positions are measured from the
/// top-left corner of the live area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Full page width.
    pub width: Unit,
    /// Full page height.
    pub height: Unit,
    /// Top margin.
    pub margin_top: Unit,
    /// Right margin.
    pub margin_right: Unit,
    /// Bottom margin.
    pub margin_bottom: Unit,
    /// Left margin.
    pub margin_left: Unit,
    /// Binding gutter, taken from the live width on the left side.
    pub gutter: Unit,
}

impl Paper {
    /// Create a paper description.
    #[must_use]
    pub const fn new(
        width: Unit,
        height: Unit,
        margin_top: Unit,
        margin_right: Unit,
        margin_bottom: Unit,
        margin_left: Unit,
        gutter: Unit,
    ) -> Self {
        Self {
            width,
            height,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            gutter,
        }
    }

    /// ISO A4 with 20mm margins.
    #[must_use]
    pub const fn a4() -> Self {
        let margin = Unit::mm(20.0);
        Self::new(Unit::mm(210.0), Unit::mm(297.0), margin, margin, margin, margin, Unit::mm(0.0))
    }

    /// US Letter with one inch margins.
    #[must_use]
    pub const fn letter() -> Self {
        let margin = Unit::inch(1.0);
        Self::new(Unit::inch(8.5), Unit::inch(11.0), margin, margin, margin, margin, Unit::inch(0.0))
    }

    /// Printable width.
    #[must_use]
    pub fn live_width(&self) -> Unit {
        self.width - self.margin_left - self.margin_right - self.gutter
    }

    /// Printable height.
    #[must_use]
    pub fn live_height(&self) -> Unit {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self::a4()
    }
}

/// Provider of per-page metrics.
///
/// Pages are indexed from zero. Implementations must return the same values
/// for the duration of a layout and render pass.
pub trait PageMetrics {
    /// Printable width of a page.
    fn live_width(&self, page: i32) -> Unit;

    /// Printable height of a page.
    fn live_height(&self, page: i32) -> Unit;

    /// Canvas position of the top-left corner of a page's live area.
    fn page_origin(&self, page: i32) -> Point;
}

/// The root context of a scene: configuration plus page metrics.
///
/// One document exists per layout session and is owned by the
/// [`SceneTree`](crate::SceneTree) whose root node stands for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    config: SceneConfig,
}

impl Document {
    /// Create a document from a configuration.
    #[must_use]
    pub const fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// A document on the given paper with otherwise default configuration.
    #[must_use]
    pub fn with_paper(paper: Paper) -> Self {
        Self::new(SceneConfig {
            paper,
            ..SceneConfig::default()
        })
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The paper every page uses.
    #[must_use]
    pub const fn paper(&self) -> &Paper {
        &self.config.paper
    }

    /// Convert an absolute document position to canvas coordinates.
    #[must_use]
    pub fn canvas_pos(&self, pos: PagePoint) -> Point {
        self.page_origin(pos.page) + pos.point()
    }
}

impl PageMetrics for Document {
    fn live_width(&self, _page: i32) -> Unit {
        self.config.paper.live_width()
    }

    fn live_height(&self, _page: i32) -> Unit {
        self.config.paper.live_height()
    }

    fn page_origin(&self, page: i32) -> Point {
        let paper = &self.config.paper;
        let stride = paper.width + self.config.page_gap;
        Point::new(
            stride * f64::from(page) + paper.margin_left + paper.gutter,
            paper.margin_top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paper() -> Paper {
        Paper::new(
            Unit::mm(210.0),
            Unit::mm(297.0),
            Unit::mm(20.0),
            Unit::mm(20.0),
            Unit::mm(20.0),
            Unit::mm(20.0),
            Unit::mm(10.0),
        )
    }

    #[test]
    fn live_area_excludes_margins_and_gutter() {
        let paper = test_paper();
        assert!(paper.live_width().approx_eq(Unit::mm(160.0)));
        assert!(paper.live_height().approx_eq(Unit::mm(257.0)));
    }

    #[test]
    fn pages_are_laid_out_left_to_right() {
        let doc = Document::with_paper(test_paper());
        let gap = doc.config().page_gap;
        let second = doc.page_origin(1);
        let expected = Unit::mm(210.0) + gap + Unit::mm(30.0);
        assert!(second.x.approx_eq(expected));
        assert!(second.y.approx_eq(Unit::mm(20.0)));

        let canvas = doc.canvas_pos(PagePoint::new(Unit::mm(5.0), Unit::mm(5.0), 0));
        assert!(canvas.approx_eq(Point::new(Unit::mm(35.0), Unit::mm(25.0))));
    }
}
