//! Glyphs: The sprite strings, one per orientation class.

use super::screen::Orientation;
use unicode_width::UnicodeWidthStr;

/// Sprite drawn while idle or moving vertically.
pub const TIE: &str = "|-o-|";
/// Sprite drawn while moving right.
pub const TIE_FORWARD: &str = "/-o-/";
/// Sprite drawn while moving left.
pub const TIE_BACKWARD: &str = "\\-o-\\";

/// The immutable sprite set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Neutral glyph (idle, up, down).
    pub neutral: String,
    /// Glyph for forward (rightward) motion.
    pub forward: String,
    /// Glyph for backward (leftward) motion.
    pub backward: String,
}

impl Glyphs {
    /// Create a sprite set from three strings.
    pub fn new(
        neutral: impl Into<String>,
        forward: impl Into<String>,
        backward: impl Into<String>,
    ) -> Self {
        Self {
            neutral: neutral.into(),
            forward: forward.into(),
            backward: backward.into(),
        }
    }

    /// The glyph drawn for an orientation.
    pub fn for_orientation(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Forward => &self.forward,
            Orientation::Backward => &self.backward,
            Orientation::Up | Orientation::Down | Orientation::Idle => &self.neutral,
        }
    }

    /// Display width of the widest glyph, in columns.
    ///
    /// Boundary checks use this so that swapping glyphs never pushes the
    /// sprite past the right edge.
    pub fn width(&self) -> u16 {
        let widest = [&self.neutral, &self.forward, &self.backward]
            .iter()
            .map(|g| g.width())
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(TIE, TIE_FORWARD, TIE_BACKWARD)
    }
}
