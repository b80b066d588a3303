/**
 * Shared Text State Management
 *
 * This module holds the single shared text value. Both the HTTP endpoint
 * and the desktop app read and replace it through `SharedTextStore`.
 *
 * The value sits behind a mutex that is held only for the copy-out on read
 * or the assignment on write, so a reader never sees a partially written
 * value. Concurrent writers are not ordered; the last completed `set` wins,
 * and its `TextChanged` event is also the last one enqueued.
 */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::shared::{RelaySender, TextOrigin};

/// Handle to the shared text
///
/// Cloning the store clones the handle, not the text.
#[derive(Clone, Debug)]
pub struct SharedTextStore {
    text: Arc<Mutex<String>>,
    relay: RelaySender,
}

impl SharedTextStore {
    pub fn new(initial: impl Into<String>, relay: RelaySender) -> Self {
        Self {
            text: Arc::new(Mutex::new(initial.into())),
            relay,
        }
    }

    // A poisoned lock still guards a whole `String`; assignments cannot tear.
    fn lock(&self) -> MutexGuard<'_, String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value
    pub fn get(&self) -> String {
        self.lock().clone()
    }

    /// Byte length of the current value
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Replace the value and enqueue a `TextChanged` event
    ///
    /// The event is sent before the lock is released.
    pub fn set(&self, new_text: impl Into<String>, origin: TextOrigin) {
        let new_text: String = new_text.into();
        let notified = new_text.clone();
        let mut guard = self.lock();
        *guard = new_text;
        tracing::debug!(
            "[Text] Shared text replaced by {} ({} bytes)",
            origin,
            notified.len()
        );
        // Enqueued under the lock so event order matches write order
        self.relay.text_changed(notified, origin);
    }

    /// Relay used for change notifications
    pub fn relay(&self) -> &RelaySender {
        &self.relay
    }
}
