//! Fly a TIE fighter with the arrow keys. Esc quits.

use std::process::ExitCode;

use tie_runner::{telemetry, EngineConfig};

fn main() -> ExitCode {
    let _telemetry = telemetry::init_tracing("info");

    match tie_runner::run(EngineConfig::default()) {
        Ok(summary) => {
            tracing::debug!(frames = summary.render.frames, "clean exit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("tie-runner: {e}");
            ExitCode::FAILURE
        }
    }
}
