/**
 * Event Relay Queue
 *
 * One-directional FIFO queue carrying `RelayEvent`s from the server side
 * (any number of producers) to the presentation thread (a single consumer).
 *
 * The queue is unbounded, so producers never block. An optional waker is
 * invoked after every enqueue; the desktop app uses it to request a repaint
 * so the consumer wakes as soon as the queue becomes non-empty.
 */
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::shared::event::{RelayEvent, ServerLifecycleState, TextOrigin};

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Producer side of the relay queue
#[derive(Clone)]
pub struct RelaySender {
    tx: mpsc::UnboundedSender<RelayEvent>,
    waker: Option<Waker>,
}

/// Consumer side of the relay queue
pub struct RelayReceiver {
    rx: mpsc::UnboundedReceiver<RelayEvent>,
}

/// Create a relay queue without a waker
pub fn event_relay() -> (RelaySender, RelayReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RelaySender { tx, waker: None }, RelayReceiver { rx })
}

/// Create a relay queue that calls `waker` after each enqueue
pub fn event_relay_with_waker(
    waker: impl Fn() + Send + Sync + 'static,
) -> (RelaySender, RelayReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        RelaySender {
            tx,
            waker: Some(Arc::new(waker)),
        },
        RelayReceiver { rx },
    )
}

impl RelaySender {
    /// Enqueue an event. Never blocks.
    ///
    /// If the consumer has gone away the event is discarded.
    pub fn send(&self, event: RelayEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("[Relay] Consumer gone, dropping event: {:?}", e.0);
            return;
        }
        if let Some(waker) = &self.waker {
            waker();
        }
    }

    pub fn log(&self, message: impl Into<String>) {
        self.send(RelayEvent::log(message));
    }

    pub fn text_changed(&self, text: impl Into<String>, origin: TextOrigin) {
        self.send(RelayEvent::text_changed(text, origin));
    }

    pub fn status(&self, state: ServerLifecycleState, detail: impl Into<String>) {
        self.send(RelayEvent::status(state, detail));
    }

    /// Whether the consumer side has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for RelaySender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelaySender")
            .field("closed", &self.tx.is_closed())
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

impl RelayReceiver {
    /// Take the next queued event without waiting
    pub fn try_next(&mut self) -> Option<RelayEvent> {
        self.rx.try_recv().ok()
    }

    /// Take every currently queued event, oldest first
    pub fn drain(&mut self) -> Vec<RelayEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next() {
            events.push(event);
        }
        events
    }

    /// Wait for the next event. Returns `None` once every sender is dropped
    /// and the queue is empty.
    pub async fn recv(&mut self) -> Option<RelayEvent> {
        self.rx.recv().await
    }
}
