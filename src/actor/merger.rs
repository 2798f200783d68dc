//! Event Merger: One channel fed by the key reader and the ticker.
//!
//! Both producers share a single sender, so the engine sees events in
//! arrival order with no priority between sources.

use super::messages::Event;
use super::{EngineConfig, InputActor, KeySource, TickerActor};
use crate::error::Result;
use crossbeam_channel::{bounded, Receiver};

/// The merged event stream and the actors producing it.
#[derive(Debug)]
pub struct EventMerger {
    events: Receiver<Event>,
    input: InputActor,
    ticker: TickerActor,
}

impl EventMerger {
    /// Spawn the key reader and the ticker onto one bounded channel.
    pub fn spawn<S: KeySource>(source: S, config: &EngineConfig) -> Result<Self> {
        let (tx, events) = bounded::<Event>(config.event_capacity);

        let input = InputActor::spawn(tx.clone(), source)?;
        let ticker = TickerActor::spawn(tx, config.tick_interval)?;
        tracing::debug!(tick_ms = config.tick_interval.as_millis(), "event merger started");

        Ok(Self {
            events,
            input,
            ticker,
        })
    }

    /// Get the merged event receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Event> {
        &self.events
    }

    /// Close the merged channel.
    ///
    /// The ticker ends at its next tick once the channel is closed. The key
    /// reader cannot be interrupted mid-read; after a quit key it has
    /// already stopped, otherwise it is left to end with the process.
    /// Neither thread is joined.
    pub fn shutdown(self) {
        let Self {
            events,
            input,
            ticker,
        } = self;
        drop(events);
        tracing::debug!(input_stopped = input.is_finished(), "event merger closed");
        drop(ticker);
    }
}
