//! Message types for actor communication.
//!
//! These enums define the protocol between actors in the system.

use crate::sprite::Screen;
use std::io;
use std::time::Instant;

/// Keys the control loop distinguishes.
///
/// This is a deliberately tiny subset of crossterm's `KeyCode`: the arrows,
/// the quit keys, and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Escape key.
    Esc,
    /// Ctrl+C. Raw mode swallows SIGINT, so it arrives as a key.
    Interrupt,
    /// A printable character.
    Char(char),
    /// Any other key.
    Other,
}

impl KeyCode {
    /// Whether this key ends the program.
    pub const fn is_quit(self) -> bool {
        matches!(self, Self::Esc | Self::Interrupt)
    }
}

/// Events on the merged channel consumed by the engine.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyCode),

    /// The ticker fired at this instant.
    IdleTick(Instant),

    /// The key reader failed and has stopped.
    InputFailed(io::Error),
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Draw a full frame for this state.
    Draw(Screen),

    /// Shutdown the render thread.
    Shutdown,
}
