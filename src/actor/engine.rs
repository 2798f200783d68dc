//! Engine: The control loop that owns the sprite state.
//!
//! The engine drains the merged event stream, turns each event into a
//! motion [`Command`], and sends every new [`Screen`] to the render actor.
//! It is the only writer of the screen state.

use super::messages::{Event, KeyCode, RenderCommand};
use crate::error::{Error, Result};
use crate::sprite::{self, Command, Glyphs, Screen};
use crossbeam_channel::{Receiver, Sender};
use std::time::{Duration, Instant};

/// Default time between idle ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Idle tick cadence, also the quiet period before an idle redraw.
    pub tick_interval: Duration,
    /// Sprite glyphs.
    pub glyphs: Glyphs,
    /// Capacity of the merged event channel.
    pub event_capacity: usize,
    /// Capacity of the render command channel.
    pub render_capacity: usize,
    /// Terminal rows left below the grid so the last line break never
    /// scrolls the frame.
    pub reserved_rows: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            glyphs: Glyphs::default(),
            event_capacity: 64,
            render_capacity: 16,
            reserved_rows: 1,
        }
    }
}

/// Decides whether an idle tick is due.
///
/// A tick counts only when at least one full interval has passed since the
/// last transition of any kind. The boundary is inclusive: a tick landing
/// exactly `interval` after the last transition is admitted.
#[derive(Debug, Clone, Copy)]
pub struct IdleGate {
    interval: Duration,
    last_transition: Instant,
}

impl IdleGate {
    /// Create a gate whose quiet period starts at `now`.
    pub const fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_transition: now,
        }
    }

    /// Whether an idle tick sent at `sent` should transition.
    ///
    /// A tick sent before the last transition is never admitted.
    pub fn admits(&self, sent: Instant) -> bool {
        sent.saturating_duration_since(self.last_transition) >= self.interval
    }

    /// Record a transition at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_transition = now;
    }
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The state changed and a frame was requested.
    Transition(Command),
    /// An idle tick arrived too early; nothing happened.
    Ignored,
    /// A quit key arrived; the loop is over.
    Quit,
}

/// Map a key to the motion it requests, or `None` for a quit key.
pub const fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Right => Some(Command::Forward),
        KeyCode::Left => Some(Command::Backward),
        KeyCode::Up => Some(Command::Up),
        KeyCode::Down => Some(Command::Down),
        KeyCode::Esc | KeyCode::Interrupt => None,
        KeyCode::Char(_) | KeyCode::Other => Some(Command::Idle),
    }
}

/// The control loop.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    screen: Screen,
    gate: IdleGate,
    render_tx: Sender<RenderCommand>,
    transitions: u64,
    started: bool,
    running: bool,
}

impl Engine {
    /// Create an engine for a `width x height` grid.
    ///
    /// The sprite starts centered and idle. No frame is sent until
    /// [`Engine::start`].
    pub fn new(
        config: EngineConfig,
        width: u16,
        height: u16,
        render_tx: Sender<RenderCommand>,
    ) -> Result<Self> {
        let screen = Screen::new(width, height, &config.glyphs)?;
        let gate = IdleGate::new(config.tick_interval, Instant::now());

        Ok(Self {
            config,
            screen,
            gate,
            render_tx,
            transitions: 0,
            started: false,
            running: true,
        })
    }

    /// Get the current screen state.
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Get the configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of transitions so far.
    pub const fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Draw the initial frame and start the idle clock at `now`.
    ///
    /// Call this before the ticker starts so the first tick, a full
    /// interval later, is admitted.
    pub fn start(&mut self, now: Instant) {
        self.started = true;
        self.gate.mark(now);
        self.request_draw();
    }

    /// Apply one event received at `now`.
    ///
    /// Keys count as transitions at `now`; idle ticks are gated and
    /// recorded at the instant the ticker sent them, so delivery latency
    /// never makes a tick look early. Once [`Step::Quit`] has been
    /// returned, further events are ignored.
    pub fn handle(&mut self, event: Event, now: Instant) -> Result<Step> {
        if !self.running {
            return Ok(Step::Ignored);
        }

        let mut at = now;
        let command = match event {
            Event::Key(code) => match command_for(code) {
                Some(command) => command,
                None => {
                    tracing::info!(?code, "quit requested");
                    self.running = false;
                    return Ok(Step::Quit);
                }
            },
            Event::IdleTick(sent) => {
                if !self.gate.admits(sent) {
                    return Ok(Step::Ignored);
                }
                at = sent;
                Command::Idle
            }
            Event::InputFailed(e) => {
                self.running = false;
                return Err(Error::InputDevice(e));
            }
        };

        self.screen = sprite::next(&self.screen, command, &self.config.glyphs);
        self.gate.mark(at);
        self.transitions += 1;
        tracing::debug!(
            ?command,
            x = self.screen.position.x,
            y = self.screen.position.y,
            "transition"
        );
        self.request_draw();

        Ok(Step::Transition(command))
    }

    /// Draw the first frame (unless [`Engine::start`] already did), then
    /// process events until quit.
    ///
    /// Returns `Ok(())` on a quit key or when every producer is gone, and
    /// the input error if the key reader failed.
    pub fn run(&mut self, events: &Receiver<Event>) -> Result<()> {
        if !self.started {
            self.start(Instant::now());
        }

        for event in events {
            if self.handle(event, Instant::now())? == Step::Quit {
                break;
            }
        }

        self.running = false;
        Ok(())
    }

    /// Tell the render actor to stop after the frames already queued.
    pub fn shutdown_renderer(&self) {
        let _ = self.render_tx.send(RenderCommand::Shutdown);
    }

    fn request_draw(&self) {
        // A dead render thread has already logged why; the loop carries on.
        let _ = self.render_tx.send(RenderCommand::Draw(self.screen.clone()));
    }
}
