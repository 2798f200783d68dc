//! Sprite module: the state the control loop owns and the rules that move it.
//!
//! This module contains:
//! - [`Glyphs`]: The three fixed sprite strings
//! - [`Screen`]: Grid size, sprite position and orientation
//! - [`motion`]: The pure state-transition function

mod glyph;
mod screen;
pub mod motion;

pub use glyph::Glyphs;
pub use motion::{next, step, Command};
pub use screen::{Orientation, Position, Screen};
