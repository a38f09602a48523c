//! Flowable frames.
//!
//! A frame is a single long horizontal strip in its own local coordinate
//! space. Layout controllers cut that strip into lines and place each line
//! somewhere on a page, so a frame-local x position maps to exactly one line
//! and from there to an absolute document position.
//!
//! ```text
//!   frame-local x:  0 ............ 100 ........ 180
//!                   | line 0        | line 1     |
//!   page 0:         (0, 0) -------- (100, 0)
//!                   (0, 50) ------- (80, 50)
//! ```

use serde::{Deserialize, Serialize};
use stave_common::warning::warn_once;
use stave_geometry::{PagePoint, Point, Unit};

use crate::document::PageMetrics;
use crate::error::SceneError;

/// A line break marker: where one line of a frame starts and how long it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutController {
    /// Frame-local x where this line begins.
    pub local_x: Unit,
    /// Absolute document position of the line's start.
    pub pos: PagePoint,
    /// Horizontal length of the line.
    pub length: Unit,
    /// Height of the line.
    pub height: Unit,
    /// Gap between this line and the one above it.
    pub offset_y: Unit,
}

impl LayoutController {
    /// Create a controller.
    #[must_use]
    pub const fn new(local_x: Unit, pos: PagePoint, length: Unit, height: Unit, offset_y: Unit) -> Self {
        Self {
            local_x,
            pos,
            length,
            height,
            offset_y,
        }
    }

    /// Frame-local x where this line ends.
    #[must_use]
    pub fn local_end(&self) -> Unit {
        self.local_x + self.length
    }

    /// Bottom-right corner of the line in document space.
    #[must_use]
    pub fn end_pos(&self) -> PagePoint {
        self.pos.offset(Point::new(self.length, self.height))
    }
}

/// A flowable region whose content wraps across lines and pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Total flowable length requested for the frame.
    pub width: Unit,
    /// Height of every line.
    pub height: Unit,
    /// Vertical gap between consecutive lines.
    pub y_padding: Unit,
    controllers: Vec<LayoutController>,
}

impl Frame {
    /// A frame without any layout yet.
    #[must_use]
    pub const fn new(width: Unit, height: Unit, y_padding: Unit) -> Self {
        Self {
            width,
            height,
            y_padding,
            controllers: Vec::new(),
        }
    }

    /// A frame with explicit line layout. `width` becomes the flowable length
    /// the controllers cover.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidLayout`] if the controllers do not start
    /// at x = 0, are not contiguous, or have a negative length.
    pub fn with_controllers(
        height: Unit,
        y_padding: Unit,
        controllers: Vec<LayoutController>,
    ) -> Result<Self, SceneError> {
        validate_controllers(&controllers)?;
        let width = controllers.last().map_or(Unit::ZERO, LayoutController::local_end);
        Ok(Self {
            width,
            height,
            y_padding,
            controllers,
        })
    }

    /// The line layout, ordered by `local_x`.
    #[must_use]
    pub fn controllers(&self) -> &[LayoutController] {
        &self.controllers
    }

    /// Replace the line layout.
    ///
    /// # Errors
    ///
    /// Same as [`Frame::with_controllers`]. On error the previous layout is
    /// kept.
    pub fn set_controllers(&mut self, controllers: Vec<LayoutController>) -> Result<(), SceneError> {
        validate_controllers(&controllers)?;
        self.controllers = controllers;
        self.width = self.flowable_length();
        Ok(())
    }

    /// Frame-local x where the last line ends. Zero before layout.
    #[must_use]
    pub fn flowable_length(&self) -> Unit {
        self.controllers.last().map_or(Unit::ZERO, LayoutController::local_end)
    }

    /// Index of the line containing frame-local `x`: the last controller
    /// whose `local_x <= x`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OutOfBounds`] if the frame has no layout or `x`
    /// falls outside `[0, flowable_length]`.
    pub fn line_index_containing(&self, x: Unit) -> Result<usize, SceneError> {
        let length = self.flowable_length();
        let out_of_bounds = || SceneError::OutOfBounds { x, length };
        if self.controllers.is_empty() || x.is_negative() || x > length {
            return Err(out_of_bounds());
        }
        self.controllers
            .partition_point(|c| c.local_x <= x)
            .checked_sub(1)
            .ok_or_else(out_of_bounds)
    }

    /// The line containing frame-local `x`.
    ///
    /// # Errors
    ///
    /// See [`Frame::line_index_containing`].
    pub fn line_containing(&self, x: Unit) -> Result<&LayoutController, SceneError> {
        let index = self.line_index_containing(x)?;
        self.controllers.get(index).ok_or_else(|| SceneError::OutOfBounds {
            x,
            length: self.flowable_length(),
        })
    }

    /// Width left on the line containing `x`, measured from `x` to the end
    /// of that line. Never negative for an in-range `x`.
    ///
    /// # Errors
    ///
    /// See [`Frame::line_index_containing`].
    pub fn remaining_width_on_line(&self, x: Unit) -> Result<Unit, SceneError> {
        Ok(self.line_containing(x)?.local_end() - x)
    }

    /// Signed distance from the end of the line containing `x` back to `x`.
    ///
    /// This is the negated [`remaining_width_on_line`](Self::remaining_width_on_line),
    /// so adding an object's width to it yields how far the object overhangs
    /// the line.
    ///
    /// # Errors
    ///
    /// See [`Frame::line_index_containing`].
    pub fn dist_to_line_end(&self, x: Unit) -> Result<Unit, SceneError> {
        Ok(-self.remaining_width_on_line(x)?)
    }

    /// Map a frame-local point to an absolute document position.
    ///
    /// # Errors
    ///
    /// See [`Frame::line_index_containing`].
    pub fn map_local_to_absolute(&self, local: Point) -> Result<PagePoint, SceneError> {
        let line = self.line_containing(local.x)?;
        Ok(line.pos.offset(Point::new(local.x - line.local_x, local.y)))
    }
}

fn validate_controllers(controllers: &[LayoutController]) -> Result<(), SceneError> {
    let Some(first) = controllers.first() else {
        return Ok(());
    };
    if !first.local_x.is_zero() {
        return Err(SceneError::InvalidLayout(format!(
            "first line starts at {} instead of 0",
            first.local_x
        )));
    }
    if let Some(c) = controllers.iter().find(|c| c.length.is_negative()) {
        return Err(SceneError::InvalidLayout(format!(
            "line at {} has negative length {}",
            c.local_x, c.length
        )));
    }
    for pair in controllers.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if !next.local_x.approx_eq(prev.local_end()) {
            return Err(SceneError::InvalidLayout(format!(
                "line at {} does not continue the line ending at {}",
                next.local_x,
                prev.local_end()
            )));
        }
    }
    Ok(())
}

/// Break a frame of the given size into lines on the pages described by
/// `metrics`.
///
/// The first line starts at `start` and runs to the right edge of the live
/// area. Every following line starts at the left edge, one line height plus
/// `y_padding` below the previous one, moving to the top of the next page
/// when it would run past the bottom of the live area. Lines are produced
/// until `width` is covered; the last one is shortened to fit.
///
/// # Errors
///
/// Returns [`SceneError::InvalidLayout`] if a page has no live width or
/// `start` lies at or past the right edge of its page.
pub fn generate_controllers(
    start: PagePoint,
    width: Unit,
    height: Unit,
    y_padding: Unit,
    metrics: &dyn PageMetrics,
) -> Result<Vec<LayoutController>, SceneError> {
    let first_length = metrics.live_width(start.page) - start.x;
    if !first_length.is_positive() {
        return Err(SceneError::InvalidLayout(format!(
            "frame starts at x = {} but page {} is only {} wide",
            start.x,
            start.page,
            metrics.live_width(start.page)
        )));
    }

    let mut controllers = vec![LayoutController::new(
        Unit::ZERO,
        start,
        first_length.min(width),
        height,
        Unit::ZERO,
    )];
    let mut covered = first_length.min(width);
    let mut pos = start;

    while covered < width && !covered.approx_eq(width) {
        let mut next = PagePoint::new(Unit::ZERO, pos.y + height + y_padding, pos.page);
        if next.y + height > metrics.live_height(next.page) {
            next = PagePoint::new(Unit::ZERO, Unit::ZERO, next.page + 1);
        }
        if height > metrics.live_height(next.page) {
            let _ = warn_once(
                "frame",
                &format!("line height {height} exceeds the live height of page {}", next.page),
            );
        }

        let live_width = metrics.live_width(next.page);
        if !live_width.is_positive() {
            return Err(SceneError::InvalidLayout(format!("page {} has no live width", next.page)));
        }
        let length = live_width.min(width - covered);
        log::trace!(target: "stave::frame", "line at local x {covered}: {next}, length {length}");
        controllers.push(LayoutController::new(covered, next, length, height, y_padding));
        covered += length;
        pos = next;
    }
    Ok(controllers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_lines() -> Frame {
        Frame::with_controllers(
            Unit::graphic(20.0),
            Unit::graphic(10.0),
            vec![
                LayoutController::new(
                    Unit::ZERO,
                    PagePoint::graphic(0.0, 0.0, 0),
                    Unit::graphic(100.0),
                    Unit::graphic(20.0),
                    Unit::ZERO,
                ),
                LayoutController::new(
                    Unit::graphic(100.0),
                    PagePoint::graphic(0.0, 50.0, 0),
                    Unit::graphic(80.0),
                    Unit::graphic(20.0),
                    Unit::graphic(10.0),
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn line_boundaries_belong_to_the_next_line() {
        let frame = two_lines();
        assert_eq!(frame.line_index_containing(Unit::graphic(99.0)).unwrap(), 0);
        assert_eq!(frame.line_index_containing(Unit::graphic(100.0)).unwrap(), 1);
        assert_eq!(frame.line_index_containing(Unit::graphic(180.0)).unwrap(), 1);
    }

    #[test]
    fn distance_to_line_end_is_negative() {
        let frame = two_lines();
        assert_eq!(frame.remaining_width_on_line(Unit::graphic(90.0)).unwrap(), Unit::graphic(10.0));
        assert_eq!(frame.dist_to_line_end(Unit::graphic(90.0)).unwrap(), Unit::graphic(-10.0));
    }

    #[test]
    fn end_pos_adds_length_and_height() {
        let frame = two_lines();
        assert_eq!(frame.controllers()[1].end_pos(), PagePoint::graphic(80.0, 70.0, 0));
    }

    #[test]
    fn empty_frame_has_no_lines() {
        let frame = Frame::new(Unit::graphic(100.0), Unit::graphic(10.0), Unit::ZERO);
        assert!(matches!(
            frame.line_index_containing(Unit::ZERO),
            Err(SceneError::OutOfBounds { .. })
        ));
        assert_eq!(frame.flowable_length(), Unit::ZERO);
    }
}
