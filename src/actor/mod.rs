//! Actor Model: Message-passing concurrency for the sprite loop.
//!
//! This module implements a small actor system using crossbeam channels:
//! - **Input Actor**: Blocks on key presses, forwards them to the engine
//! - **Ticker Actor**: Emits an idle tick at a fixed cadence
//! - **Render Actor**: Receives screens, repaints the terminal
//! - **Engine**: Owns the sprite state, turns events into transitions
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Event::Key
//! │ Input Thread │ ─────────────┐
//! └──────────────┘              ▼        ┌──────────────┐
//!                          merged channel│    Engine    │
//! ┌──────────────┐              ▲  ────▶ │ (main thread)│
//! │Ticker Thread │ ─────────────┘        └──────────────┘
//! └──────────────┘  Event::IdleTick             │
//!                                               │ RenderCommand
//!                                               ▼
//!                                        ┌──────────────┐
//!                                        │Render Thread │
//!                                        └──────────────┘
//! ```

mod messages;
mod input;
mod ticker;
mod merger;
mod renderer;
mod engine;

pub use messages::{Event, KeyCode, RenderCommand};
pub use input::{convert_key, CrosstermKeys, InputActor, KeySource};
pub use ticker::TickerActor;
pub use merger::EventMerger;
pub use renderer::{Frame, RenderStats, Renderer, RendererActor};
pub use engine::{command_for, Engine, EngineConfig, IdleGate, Step, DEFAULT_TICK_INTERVAL};
