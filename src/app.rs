//! App: Wires the terminal, the actors and the engine into one run.

use crate::actor::{
    CrosstermKeys, Engine, EngineConfig, EventMerger, KeySource, RenderCommand, RenderStats,
    RendererActor,
};
use crate::error::{Error, Result};
use crate::terminal::{
    CrosstermTerminal, OutputSink, RawModeGuard, TerminalInfo, TerminalOutput,
};
use crossbeam_channel::bounded;
use std::io;
use std::time::Instant;

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Transitions applied by the engine.
    pub transitions: u64,
    /// Frames drawn by the render actor.
    pub render: RenderStats,
}

/// Run one session against explicit collaborators.
///
/// The grid is the terminal size minus [`EngineConfig::reserved_rows`].
/// Returns after a quit key, once the last queued frame is written.
pub fn run_session<T, K, S>(
    config: EngineConfig,
    terminal: &T,
    keys: K,
    sink: S,
) -> Result<Summary>
where
    T: TerminalInfo,
    K: KeySource,
    S: OutputSink + Send + 'static,
{
    let (columns, rows) = terminal.size().map_err(Error::Setup)?;
    let height = rows.saturating_sub(config.reserved_rows);
    tracing::info!(columns, rows, height, "terminal measured");

    let (render_tx, render_rx) = bounded::<RenderCommand>(config.render_capacity);
    let mut engine = Engine::new(config, columns, height, render_tx)?;
    let renderer = RendererActor::spawn(render_rx, sink)?;
    // Start the idle clock before the first tick can be sent
    engine.start(Instant::now());
    let merger = EventMerger::spawn(keys, engine.config())?;

    let outcome = engine.run(merger.receiver());

    engine.shutdown_renderer();
    let render = renderer.join();
    merger.shutdown();

    outcome?;
    tracing::info!(
        transitions = engine.transitions(),
        frames = render.frames,
        "session ended"
    );
    Ok(Summary {
        transitions: engine.transitions(),
        render,
    })
}

/// Run on the real terminal: raw mode, crossterm keys, stdout.
pub fn run(config: EngineConfig) -> Result<Summary> {
    let mut guard = RawModeGuard::enter().map_err(Error::Setup)?;
    let result = run_session(
        config,
        &CrosstermTerminal,
        CrosstermKeys,
        TerminalOutput::new(io::stdout()),
    );
    let restored = guard.exit();

    let summary = result?;
    restored.map_err(Error::Setup)?;
    Ok(summary)
}
