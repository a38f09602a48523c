//! Display list: an in-memory record of drawing commands.
//!
//! The display list is the reference [`RenderBackend`]. It rasterizes
//! nothing; every draw call is stored in order and answered with a handle
//! equal to its index in the list.

use serde::{Deserialize, Serialize};
use stave_scene::SegmentHandle;

use crate::backend::{DrawPath, DrawText, RenderBackend};
use crate::error::RenderError;

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayCommand {
    /// Draw a path, possibly clipped to one segment of it.
    DrawPath(DrawPath),
    /// Draw a text run.
    DrawText(DrawText),
}

/// A list of drawing commands in painting order.
///
/// Commands are stored back to front: parents before their children, and
/// the segments of one node in flow order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command and return its handle.
    pub fn push(&mut self, command: DisplayCommand) -> SegmentHandle {
        let handle = SegmentHandle(self.commands.len());
        self.commands.push(command);
        handle
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Look up the command a handle was issued for.
    #[must_use]
    pub fn get(&self, handle: SegmentHandle) -> Option<&DisplayCommand> {
        self.commands.get(handle.0)
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Dump the commands as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RenderBackend for DisplayList {
    fn draw_path(&mut self, command: &DrawPath) -> SegmentHandle {
        self.push(DisplayCommand::DrawPath(command.clone()))
    }

    fn draw_text(&mut self, command: &DrawText) -> SegmentHandle {
        self.push(DisplayCommand::DrawText(command.clone()))
    }
}
