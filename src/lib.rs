//! # Tie Runner
//!
//! A TIE fighter that flies around the terminal on the arrow keys.
//!
//! A minimal real-time loop: key presses and a periodic idle tick are merged
//! into one event stream, a pure motion function computes the next sprite
//! position, and a render thread repaints the whole grid in place with
//! cursor-relative escape codes.
//!
//! ## Core Concepts
//!
//! - **Actor model**: Input, ticker and render threads talk to the engine
//!   only through channels
//! - **Single writer**: The engine owns the [`Screen`]; the renderer gets a
//!   copy per frame
//! - **Wraparound**: Flying off one edge re-enters from the opposite one
//! - **Full redraw**: Every frame overwrites every cell
//!
//! ## Example
//!
//! ```rust
//! use tie_runner::{next, Command, Glyphs, Screen};
//!
//! let glyphs = Glyphs::default();
//! let screen = Screen::new(80, 24, &glyphs).unwrap();
//! let moved = next(&screen, Command::Forward, &glyphs);
//! assert_eq!(moved.position.x, 40);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod error;
pub mod sprite;
pub mod telemetry;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, Event, EventMerger, KeyCode, KeySource, RenderCommand, Step};
pub use app::{run, run_session, Summary};
pub use error::{Error, Result};
pub use sprite::{next, step, Command, Glyphs, Orientation, Position, Screen};
pub use terminal::{OutputSink, TerminalInfo};
