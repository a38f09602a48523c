//! Layout session configuration.

use serde::{Deserialize, Serialize};
use stave_geometry::Unit;

use crate::document::Paper;
use crate::error::SceneError;
use crate::style::{Brush, Pen};

/// Configuration shared by every node of a scene.
///
/// Every field has a default, so a JSON document only needs to name what it
/// overrides:
///
/// ```
/// use stave_scene::SceneConfig;
///
/// let config = SceneConfig::from_json(r#"{ "page_gap": { "value": 5.0, "kind": "Mm" } }"#).unwrap();
/// assert_eq!(config.page_gap.value(), 5.0);
/// assert_eq!(config.paper, SceneConfig::default().paper);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Paper used by every page.
    pub paper: Paper,
    /// Horizontal gap between pages on the canvas.
    pub page_gap: Unit,
    /// Pen used by nodes that don't set one.
    pub default_pen: Pen,
    /// Brush used by nodes that don't set one.
    pub default_brush: Brush,
}

impl SceneConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Config`] if the document is not valid JSON or
    /// does not match the configuration schema.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            paper: Paper::a4(),
            page_gap: Unit::mm(25.0),
            default_pen: Pen::default(),
            default_brush: Brush::default(),
        }
    }
}
