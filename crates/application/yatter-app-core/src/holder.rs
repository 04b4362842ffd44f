//! Contract shared by every screen state holder, plus the worker that runs a
//! holder's use cases off its timeline.

use async_trait::async_trait;
use std::future::Future;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::navigation::NavigationObserver;
use crate::snapshot::{SnapshotStream, UiSnapshot};

pub type RunId = Uuid;

/// Where a holder is in its submit cycle. Success and failure are folded
/// into the snapshot, after which the phase returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting(RunId),
}

/// Single source of truth for one screen.
///
/// All mutation happens through `&mut self`, which is the holder's serialized
/// timeline. Use case results only touch state inside [`tick`] or [`settle`].
///
/// [`tick`]: ScreenStateHolder::tick
/// [`settle`]: ScreenStateHolder::settle
#[async_trait]
pub trait ScreenStateHolder: Send + 'static {
    type Snapshot: UiSnapshot;

    fn snapshot(&self) -> SnapshotStream<Self::Snapshot>;

    fn navigation(&self) -> NavigationObserver;

    /// Acknowledges the pending navigation command. Idempotent.
    fn on_navigation_consumed(&mut self);

    fn phase(&self) -> SubmissionPhase;

    /// Folds every completion that has already arrived, without waiting.
    fn tick(&mut self);

    /// Waits for the in-flight use case, if any, and folds its result.
    async fn settle(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("a use case is already in flight ({0})")]
    Busy(RunId),
    #[error("failed to start worker: {0}")]
    Spawn(String),
}

struct Completion<O> {
    run_id: RunId,
    outcome: O,
}

/// Runs at most one use case at a time for its owner and hands the result
/// back over a channel.
///
/// Dropping the runner cancels the in-flight task; a result that still
/// arrives has no receiver and is discarded.
pub struct UseCaseRunner<O> {
    tx: mpsc::Sender<Completion<O>>,
    rx: mpsc::Receiver<Completion<O>>,
    cancel: CancellationToken,
    in_flight: Option<RunId>,
}

impl<O: Send + 'static> UseCaseRunner<O> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(yatter_config::OUTCOME_CHANNEL_CAPACITY);
        Self {
            tx,
            rx,
            cancel: CancellationToken::new(),
            in_flight: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        match self.in_flight {
            Some(run_id) => SubmissionPhase::Submitting(run_id),
            None => SubmissionPhase::Idle,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn start<F>(&mut self, fut: F) -> Result<RunId, RunnerError>
    where
        F: Future<Output = O> + Send + 'static,
    {
        if let Some(run_id) = self.in_flight {
            return Err(RunnerError::Busy(run_id));
        }

        let run_id: RunId = Uuid::new_v4();
        let token = self.cancel.child_token();
        let tx = self.tx.clone();
        crate::async_runtime::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(%run_id, "use case cancelled");
                }
                outcome = fut => {
                    let _ = tx.send(Completion { run_id, outcome }).await;
                }
            }
        })
        .map_err(|e| RunnerError::Spawn(e.to_string()))?;

        self.in_flight = Some(run_id);
        Ok(run_id)
    }

    /// Returns the in-flight result if it has already arrived.
    pub fn try_next(&mut self) -> Option<O> {
        while let Ok(done) = self.rx.try_recv() {
            if let Some(outcome) = self.accept(done) {
                return Some(outcome);
            }
        }
        None
    }

    /// Waits for the in-flight result. Returns `None` immediately when idle.
    pub async fn next(&mut self) -> Option<O> {
        while self.in_flight.is_some() {
            let done = self.rx.recv().await?;
            if let Some(outcome) = self.accept(done) {
                return Some(outcome);
            }
        }
        None
    }

    fn accept(&mut self, done: Completion<O>) -> Option<O> {
        if self.in_flight != Some(done.run_id) {
            debug!(run_id = %done.run_id, "dropping stale completion");
            return None;
        }
        self.in_flight = None;
        Some(done.outcome)
    }
}

impl<O: Send + 'static> Default for UseCaseRunner<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Drop for UseCaseRunner<O> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn second_start_is_rejected_while_busy() {
        let gate = Arc::new(Notify::new());
        let mut runner = UseCaseRunner::<u32>::new();

        let g = gate.clone();
        let first = runner
            .start(async move {
                g.notified().await;
                1
            })
            .unwrap();
        assert_eq!(runner.phase(), SubmissionPhase::Submitting(first));
        assert!(matches!(
            runner.start(async { 2 }),
            Err(RunnerError::Busy(id)) if id == first
        ));

        gate.notify_one();
        assert_eq!(runner.next().await, Some(1));
        assert_eq!(runner.phase(), SubmissionPhase::Idle);
        assert_eq!(runner.next().await, None);
    }

    #[test]
    fn runs_without_ambient_runtime() {
        let mut runner = UseCaseRunner::<u32>::new();
        runner.start(async { 7 }).unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(3);
        while std::time::Instant::now() < deadline {
            if let Some(v) = runner.try_next() {
                assert_eq!(v, 7);
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("completion never arrived");
    }
}
