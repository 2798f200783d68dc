//! Screen: The authoritative render state owned by the control loop.

use super::glyph::Glyphs;
use crate::error::{Error, Result};

/// Sprite anchor in the character grid (top-left of the glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Which way the sprite is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Moving right.
    Forward,
    /// Moving left.
    Backward,
    /// Moving up.
    Up,
    /// Moving down.
    Down,
    /// Not moving.
    #[default]
    Idle,
}

/// Grid dimensions plus the sprite's position, orientation and glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    sprite_width: u16,
    /// Current sprite anchor.
    pub position: Position,
    /// Current orientation.
    pub orientation: Orientation,
    /// Glyph drawn at `position`.
    pub sprite: String,
}

impl Screen {
    /// Build the startup state for a `width x height` grid, sprite centered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalTooSmall`] if the grid cannot hold the sprite.
    pub fn new(width: u16, height: u16, glyphs: &Glyphs) -> Result<Self> {
        let sprite_width = glyphs.width();
        if width < sprite_width || height == 0 || sprite_width == 0 {
            return Err(Error::TerminalTooSmall {
                width,
                height,
                sprite_width,
            });
        }

        Ok(Self {
            width,
            height,
            sprite_width,
            position: Position::new((width - sprite_width) / 2, height / 2),
            orientation: Orientation::Idle,
            sprite: glyphs.neutral.clone(),
        })
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Columns reserved for the sprite.
    #[inline]
    pub const fn sprite_width(&self) -> u16 {
        self.sprite_width
    }

    /// Largest valid x coordinate.
    #[inline]
    pub const fn max_x(&self) -> u16 {
        self.width - self.sprite_width
    }

    /// Check the position invariant: sprite fully inside the grid.
    pub const fn is_normalized(&self) -> bool {
        self.position.x <= self.max_x() && self.position.y < self.height
    }
}
