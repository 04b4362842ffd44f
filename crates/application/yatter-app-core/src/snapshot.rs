//! Latest-value channel carrying a screen's UI snapshot.
//!
//! The publisher half stays inside the holder; views only ever get a
//! [`SnapshotStream`], which can read and wait but never write.

use tokio::sync::watch;

/// Marker trait for UI snapshot values.
///
/// Snapshots are immutable values: every change produces a new one, and
/// observers always see a whole value.
pub trait UiSnapshot: Clone + PartialEq + Default + Send + Sync + 'static {}

pub struct SnapshotPublisher<S> {
    tx: watch::Sender<S>,
}

impl<S: UiSnapshot> SnapshotPublisher<S> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(S::default());
        Self { tx }
    }

    pub fn current(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Replaces the snapshot with `f(current)` in one step. Observers are only
    /// woken when the value actually changed.
    pub fn update(&self, f: impl FnOnce(&S) -> S) {
        self.tx.send_if_modified(|state| {
            let next = f(state);
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });
    }

    pub fn subscribe(&self) -> SnapshotStream<S> {
        SnapshotStream {
            rx: self.tx.subscribe(),
        }
    }
}

impl<S: UiSnapshot> Default for SnapshotPublisher<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only subscription to a holder's snapshot.
#[derive(Clone)]
pub struct SnapshotStream<S> {
    rx: watch::Receiver<S>,
}

impl<S: UiSnapshot> SnapshotStream<S> {
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Waits for the next snapshot. Returns `None` once the holder is gone.
    pub async fn changed(&mut self) -> Option<S> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
