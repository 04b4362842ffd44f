use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Notify;
use tracing::debug;

use super::Destination;

struct Inner {
    pending: Mutex<Option<Destination>>,
    generation: AtomicU64,
    notify: Notify,
}

impl Inner {
    fn pending(&self) -> Option<Destination> {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.notify.notify_waiters();
    }
}

/// Single pending navigation command, owned by one holder.
///
/// A command stays pending until [`NavigationSlot::consume`] is called, so a
/// view that re-subscribes sees it again instead of losing it, and a view that
/// already acted on it must acknowledge it to stop it re-firing.
pub struct NavigationSlot {
    inner: Arc<Inner>,
}

impl NavigationSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Stores `dest`, replacing any command still pending. Returns the
    /// replaced command.
    pub fn set(&self, dest: Destination) -> Option<Destination> {
        let replaced = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(dest);
        if let Some(existing) = replaced {
            debug!(dropped = %existing.route, pending = %dest.route, "replacing unacknowledged navigation");
        }
        self.inner.bump();
        replaced
    }

    /// Clears the pending command. Calling it on an empty slot does nothing.
    pub fn consume(&self) -> Option<Destination> {
        let taken = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if taken.is_some() {
            self.inner.bump();
        }
        taken
    }

    pub fn pending(&self) -> Option<Destination> {
        self.inner.pending()
    }

    /// A new observer's first `changed()` reports a command that is already
    /// pending.
    pub fn observer(&self) -> NavigationObserver {
        let pending = self.inner.pending().is_some();
        let generation = self.inner.generation.load(Ordering::Acquire);
        NavigationObserver {
            inner: self.inner.clone(),
            seen: if pending {
                generation.wrapping_sub(1)
            } else {
                generation
            },
        }
    }
}

impl Default for NavigationSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a [`NavigationSlot`]. Peeking never clears the command.
#[derive(Clone)]
pub struct NavigationObserver {
    inner: Arc<Inner>,
    seen: u64,
}

impl NavigationObserver {
    pub fn pending(&self) -> Option<Destination> {
        self.inner.pending()
    }

    /// Waits until the slot was set or cleared since the last call, then
    /// returns its current content.
    pub async fn changed(&mut self) -> Option<Destination> {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let current = self.inner.generation.load(Ordering::Acquire);
            if current != self.seen {
                self.seen = current;
                return self.inner.pending();
            }
            notified.await;
        }
    }
}
