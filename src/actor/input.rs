//! Input Actor: Dedicated thread for reading key presses.
//!
//! The thread blocks on a [`KeySource`] between presses and forwards every
//! key to the merged event channel. It stops after forwarding a quit key,
//! after a read failure, or once the receiving side is gone.

use super::messages::{Event, KeyCode};
use crate::error::{Error, Result};
use crossbeam_channel::Sender;
use crossterm::event::{self, KeyEventKind, KeyModifiers};
use std::io;
use std::thread::{self, JoinHandle};

/// A blocking source of key presses.
pub trait KeySource: Send + 'static {
    /// Block until the next key press.
    fn next_key(&mut self) -> io::Result<KeyCode>;
}

/// [`KeySource`] reading the terminal through crossterm.
///
/// Requires raw mode; see [`crate::terminal::RawModeGuard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyCode> {
        loop {
            if let event::Event::Key(key) = event::read()? {
                // Only process key press events (not release or repeat)
                if key.kind == KeyEventKind::Press {
                    return Ok(convert_key(key.code, key.modifiers));
                }
            }
        }
    }
}

/// Convert a crossterm key to our [`KeyCode`].
pub fn convert_key(code: event::KeyCode, modifiers: KeyModifiers) -> KeyCode {
    match code {
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyCode::Interrupt
        }
        event::KeyCode::Char(c) => KeyCode::Char(c),
        _ => KeyCode::Other,
    }
}

/// Input actor that reads keys on its own thread.
#[derive(Debug)]
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Merged event channel.
    /// * `source` - Where keys come from.
    pub fn spawn<S: KeySource>(sender: Sender<Event>, source: S) -> Result<Self> {
        let handle = thread::Builder::new()
            .name("tie-input".to_string())
            .spawn(move || Self::run_loop(&sender, source))
            .map_err(|source| Error::Spawn {
                name: "input",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Whether the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the input thread to finish.
    ///
    /// Only returns once the source has produced a quit key or failed.
    #[cfg(test)]
    fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop<S: KeySource>(sender: &Sender<Event>, mut source: S) {
        loop {
            match source.next_key() {
                Ok(code) => {
                    if sender.send(Event::Key(code)).is_err() {
                        // Receiver dropped, exit
                        break;
                    }
                    if code.is_quit() {
                        tracing::debug!(?code, "quit key read, input actor stopping");
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "key read failed");
                    let _ = sender.send(Event::InputFailed(e));
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<io::Result<KeyCode>>);

    impl KeySource for Scripted {
        fn next_key(&mut self) -> io::Result<KeyCode> {
            self.0
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script done")))
        }
    }

    #[test]
    fn test_convert_arrows() {
        let none = KeyModifiers::NONE;
        assert_eq!(convert_key(event::KeyCode::Left, none), KeyCode::Left);
        assert_eq!(convert_key(event::KeyCode::Right, none), KeyCode::Right);
        assert_eq!(convert_key(event::KeyCode::Up, none), KeyCode::Up);
        assert_eq!(convert_key(event::KeyCode::Down, none), KeyCode::Down);
    }

    #[test]
    fn test_convert_quit_keys() {
        assert_eq!(convert_key(event::KeyCode::Esc, KeyModifiers::NONE), KeyCode::Esc);
        assert_eq!(
            convert_key(event::KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyCode::Interrupt
        );
        assert_eq!(
            convert_key(event::KeyCode::Char('c'), KeyModifiers::NONE),
            KeyCode::Char('c')
        );
        assert_eq!(convert_key(event::KeyCode::F(1), KeyModifiers::NONE), KeyCode::Other);
    }

    #[test]
    fn test_stops_after_quit() {
        let (tx, rx) = unbounded();
        let script = Scripted(VecDeque::from([
            Ok(KeyCode::Right),
            Ok(KeyCode::Esc),
            Ok(KeyCode::Left),
        ]));
        let actor = InputActor::spawn(tx, script).unwrap();
        actor.join();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::Key(KeyCode::Right)));
        assert!(matches!(events[1], Event::Key(KeyCode::Esc)));
        // The only sender is gone
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_read_failure_is_forwarded() {
        let (tx, rx) = unbounded();
        let script = Scripted(VecDeque::from([Ok(KeyCode::Up)]));
        InputActor::spawn(tx, script).unwrap().join();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], Event::InputFailed(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
