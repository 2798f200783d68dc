//! Error types.
//!
//! Every failure below the control loop is fatal: setup errors abort before
//! the first frame, input errors end the loop. Nothing here is retried.

use std::io;
use thiserror::Error;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw mode or the size query failed.
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),

    /// The measured grid cannot hold the sprite.
    #[error("terminal too small: {width}x{height} cannot fit a sprite {sprite_width} columns wide")]
    TerminalTooSmall {
        /// Grid width in columns.
        width: u16,
        /// Grid height in rows.
        height: u16,
        /// Display width of the widest glyph.
        sprite_width: u16,
    },

    /// Reading a key from the terminal failed.
    #[error("input device failed: {0}")]
    InputDevice(#[source] io::Error),

    /// The OS refused to start an actor thread.
    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        /// Thread name.
        name: &'static str,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether this error happened before the loop started.
    pub const fn is_setup(&self) -> bool {
        matches!(self, Self::Setup(_) | Self::TerminalTooSmall { .. } | Self::Spawn { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
