//! Terminal module: Everything that touches the real terminal.
//!
//! This module contains:
//! - [`TerminalInfo`]: Size discovery, queried once at startup
//! - [`RawModeGuard`]: Raw mode and cursor visibility, restored on drop
//! - [`output`]: The [`OutputSink`] the renderer writes through

pub mod output;

pub use output::{OutputBuffer, OutputSink, TerminalOutput, LINE_BREAK};

use crossterm::{cursor, execute, terminal};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Static flag to track if raw mode is active (for the panic hook).
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Source of the grid dimensions.
pub trait TerminalInfo {
    /// Terminal size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// [`TerminalInfo`] backed by crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl TerminalInfo for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

/// Guard that keeps the terminal in raw mode with a hidden cursor.
///
/// Dropping the guard (or panicking while it is alive) shows the cursor
/// and leaves raw mode.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if enabling raw mode fails.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        let guard = Self { active: true };

        execute!(io::stdout(), cursor::Hide)?;
        tracing::debug!("raw mode enabled");
        Ok(guard)
    }

    /// Restore the terminal now instead of on drop.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            restore()?;
            tracing::debug!("raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = restore();
        }
    }
}

fn restore() -> io::Result<()> {
    RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
    let shown = execute!(io::stdout(), cursor::Show);
    terminal::disable_raw_mode()?;
    shown
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = restore();
        }
        original_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_guard_enter_and_exit() {
        // Raw mode needs a TTY; skip quietly under CI.
        match RawModeGuard::enter() {
            Ok(mut guard) => {
                assert!(RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                guard.exit().unwrap();
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                drop(guard);
            }
            Err(e) => eprintln!("Skipping test (no TTY): {e}"),
        }
    }
}
