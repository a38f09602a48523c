//! Stroke and fill attributes.
//!
//! Pens and brushes are opaque to the layout core: a node carries them and
//! the painter hands them to the rendering backend untouched. Nodes without
//! an explicit pen or brush fall back to the [`SceneConfig`] defaults at
//! dispatch time.
//!
//! [`SceneConfig`]: crate::SceneConfig

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stave_geometry::Unit;
use strum_macros::{Display, EnumString};

use crate::error::SceneError;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// A color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidColor`] for any other shape of input.
    pub fn from_hex(hex: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Dash pattern of a pen stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum StrokePattern {
    /// No stroke is drawn.
    Invisible,
    /// A continuous line.
    #[default]
    Solid,
    /// Dashes.
    Dash,
    /// Dots.
    Dot,
    /// Alternating dashes and dots.
    DashDot,
    /// A dash followed by two dots.
    DashDotDot,
}

/// How two stroke segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum PenJoinStyle {
    /// Cut-off corner.
    #[default]
    Bevel,
    /// Sharp corner.
    Miter,
    /// Rounded corner.
    Round,
}

/// How open stroke ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum PenCapStyle {
    /// The stroke stops exactly at the end point.
    #[default]
    Flat,
    /// The stroke extends half its thickness past the end point.
    Square,
    /// A half-circle past the end point.
    Round,
}

/// Fill pattern of a brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum FillPattern {
    /// Nothing is filled.
    Invisible,
    /// A uniform color.
    #[default]
    Solid,
    /// Very dense dot pattern.
    Dense1,
    /// Dense dot pattern.
    Dense2,
    /// Sparse dot pattern.
    Dense6,
    /// Horizontal hatching.
    Horizontal,
    /// Vertical hatching.
    Vertical,
    /// Crossed hatching.
    Cross,
}

/// Outline drawing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke thickness. Zero draws a hairline.
    pub thickness: Unit,
    /// Dash pattern.
    pub pattern: StrokePattern,
    /// Corner join style.
    pub join: PenJoinStyle,
    /// End cap style.
    pub cap: PenCapStyle,
}

impl Pen {
    /// A solid pen of the given color and thickness.
    #[must_use]
    pub fn new(color: Color, thickness: Unit) -> Self {
        Self {
            color,
            thickness,
            ..Self::default()
        }
    }

    /// A pen that draws nothing.
    #[must_use]
    pub fn no_pen() -> Self {
        Self {
            pattern: StrokePattern::Invisible,
            ..Self::default()
        }
    }

    /// Copy of this pen with another pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: StrokePattern) -> Self {
        self.pattern = pattern;
        self
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: Unit::ZERO,
            pattern: StrokePattern::Solid,
            join: PenJoinStyle::Bevel,
            cap: PenCapStyle::Flat,
        }
    }
}

/// Fill attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Brush {
    /// Fill color.
    pub color: Color,
    /// Fill pattern.
    pub pattern: FillPattern,
}

impl Brush {
    /// A solid brush.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            pattern: FillPattern::Solid,
        }
    }

    /// A brush that fills nothing.
    #[must_use]
    pub const fn no_brush() -> Self {
        Self {
            color: Color::BLACK,
            pattern: FillPattern::Invisible,
        }
    }

    /// Copy of this brush with another pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: FillPattern) -> Self {
        self.pattern = pattern;
        self
    }
}

/// The optional drawing attributes of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Outline pen, or the configured default.
    pub pen: Option<Pen>,
    /// Fill brush, or the configured default.
    pub brush: Option<Brush>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Color::from_hex("#eeddcc").unwrap(), Color::rgb(238, 221, 204));
        assert_eq!(Color::from_hex("#00000080").unwrap(), Color::rgba(0, 0, 0, 128));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["eeddcc", "#eedd", "#gg0000", "#ééddcc"] {
            assert!(matches!(Color::from_hex(bad), Err(SceneError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn color_display_round_trips() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn patterns_parse_from_snake_case() {
        assert_eq!("dash_dot".parse::<StrokePattern>().unwrap(), StrokePattern::DashDot);
        assert_eq!("dense1".parse::<FillPattern>().unwrap(), FillPattern::Dense1);
        assert_eq!(PenCapStyle::Square.to_string(), "square");
    }

    #[test]
    fn brush_defaults_to_solid() {
        assert_eq!(Brush::new(Color::rgb(255, 255, 255)).pattern, FillPattern::Solid);
        assert_eq!(Brush::no_brush().pattern, FillPattern::Invisible);
        assert_eq!(Pen::no_pen().pattern, StrokePattern::Invisible);
    }
}
