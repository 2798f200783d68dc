//! Ticker Actor: Dedicated thread for the idle tick.
//!
//! Sends [`Event::IdleTick`] into the merged channel once per interval,
//! whether or not keys are arriving. Each tick carries the instant it was
//! sent; the engine decides whether a tick actually does anything.

use super::messages::Event;
use crate::error::{Error, Result};
use crossbeam_channel::{Sender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Ticker actor that feeds idle ticks into the event channel.
///
/// The thread has no shutdown switch of its own: it ends at the first tick
/// after every receiver of the event channel is gone.
#[derive(Debug)]
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
}

impl TickerActor {
    /// Spawn a new ticker actor with the given interval.
    ///
    /// # Arguments
    ///
    /// * `sender` - Merged event channel.
    /// * `interval` - Time between ticks.
    pub fn spawn(sender: Sender<Event>, interval: Duration) -> Result<Self> {
        let handle = thread::Builder::new()
            .name("tie-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&sender, interval);
            })
            .map_err(|source| Error::Spawn {
                name: "ticker",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the ticker thread to finish.
    #[cfg(test)]
    fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    ///
    /// Sleeps a full interval after every send, so consecutive ticks are
    /// never closer than `interval` no matter how late one of them was.
    fn run_loop(sender: &Sender<Event>, interval: Duration) {
        loop {
            thread::sleep(interval);

            // Non-blocking send - if the channel is full, skip this tick
            // (a backlog of idle ticks is worthless)
            if let Err(TrySendError::Disconnected(_)) =
                sender.try_send(Event::IdleTick(Instant::now()))
            {
                break;
            }
        }

        tracing::trace!("ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, unbounded};

    #[test]
    fn test_ticker_basic() {
        let (tx, rx) = unbounded();
        let ticker = TickerActor::spawn(tx, Duration::from_millis(10)).unwrap();

        // Should receive ticks
        let tick = rx.recv_timeout(Duration::from_millis(200));
        assert!(matches!(tick, Ok(Event::IdleTick(_))));

        // Second tick
        let tick2 = rx.recv_timeout(Duration::from_millis(200));
        assert!(matches!(tick2, Ok(Event::IdleTick(_))));

        drop(rx);
        ticker.join();
    }

    #[test]
    fn test_ticks_are_at_least_one_interval_apart() {
        let interval = Duration::from_millis(15);
        let (tx, rx) = unbounded();
        let ticker = TickerActor::spawn(tx, interval).unwrap();

        let stamps: Vec<Instant> = rx
            .iter()
            .take(6)
            .filter_map(|e| match e {
                Event::IdleTick(at) => Some(at),
                _ => None,
            })
            .collect();
        assert_eq!(stamps.len(), 6);
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= interval);
        }

        drop(rx);
        ticker.join();
    }

    #[test]
    fn test_ticker_drops_ticks_when_full() {
        let (tx, rx) = bounded(1);
        let ticker = TickerActor::spawn(tx, Duration::from_millis(2)).unwrap();
        thread::sleep(Duration::from_millis(50));

        assert_eq!(rx.try_iter().count(), 1);
        drop(rx);
        ticker.join();
    }

    #[test]
    fn test_ticker_stops_when_receiver_dropped() {
        let (tx, rx) = unbounded();
        let ticker = TickerActor::spawn(tx, Duration::from_millis(5)).unwrap();
        drop(rx);
        thread::sleep(Duration::from_millis(50));
        assert!(ticker.handle.as_ref().is_some_and(JoinHandle::is_finished));
    }
}
