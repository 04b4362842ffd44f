use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::events::{FetchTrigger, TimelineEvent};
use super::reducer::reduce;
use super::state::PublicTimelineUiState;
use crate::holder::{ScreenStateHolder, SubmissionPhase, UseCaseRunner};
use crate::navigation::{Destination, NavigationObserver, NavigationSlot, Route};
use crate::snapshot::{SnapshotPublisher, SnapshotStream};
use crate::usecase::{GetPublicTimelineUseCase, TimelineUseCaseResult};

pub struct PublicTimelineHolder<U> {
    get_public_timeline: Arc<U>,
    state: SnapshotPublisher<PublicTimelineUiState>,
    destination: NavigationSlot,
    runner: UseCaseRunner<TimelineUseCaseResult>,
}

impl<U: GetPublicTimelineUseCase> PublicTimelineHolder<U> {
    pub fn new(get_public_timeline: Arc<U>) -> Self {
        Self {
            get_public_timeline,
            state: SnapshotPublisher::new(),
            destination: NavigationSlot::new(),
            runner: UseCaseRunner::new(),
        }
    }

    pub fn ui_state(&self) -> PublicTimelineUiState {
        self.state.current()
    }

    pub fn on_resume(&mut self) {
        self.fetch(FetchTrigger::Resume);
    }

    pub fn on_refresh(&mut self) {
        self.fetch(FetchTrigger::Refresh);
    }

    pub fn on_click_post(&mut self) {
        self.destination.set(Destination::new(Route::Post));
    }

    /// One fetch at a time; a trigger while one is running is dropped.
    fn fetch(&mut self, trigger: FetchTrigger) {
        if self.runner.is_busy() {
            debug!(?trigger, "timeline fetch already in flight, ignoring");
            return;
        }

        let use_case = self.get_public_timeline.clone();
        match self.runner.start(async move { use_case.execute().await }) {
            Ok(run_id) => {
                debug!(%run_id, ?trigger, "timeline fetch started");
                self.apply(TimelineEvent::FetchStarted(trigger));
            }
            Err(e) => error!("could not start timeline fetch: {e}"),
        }
    }

    fn apply(&self, ev: TimelineEvent) {
        self.state.update(|s| reduce(s.clone(), ev));
    }

    fn finish(&mut self, result: TimelineUseCaseResult) {
        match &result {
            Ok(yweets) => info!(count = yweets.len(), "public timeline loaded"),
            Err(failure) => warn!(?failure, "public timeline fetch failed"),
        }
        self.apply(TimelineEvent::FetchFinished(result));
    }
}

#[async_trait]
impl<U: GetPublicTimelineUseCase> ScreenStateHolder for PublicTimelineHolder<U> {
    type Snapshot = PublicTimelineUiState;

    fn snapshot(&self) -> SnapshotStream<PublicTimelineUiState> {
        self.state.subscribe()
    }

    fn navigation(&self) -> NavigationObserver {
        self.destination.observer()
    }

    fn on_navigation_consumed(&mut self) {
        self.destination.consume();
    }

    fn phase(&self) -> SubmissionPhase {
        self.runner.phase()
    }

    fn tick(&mut self) {
        while let Some(result) = self.runner.try_next() {
            self.finish(result);
        }
    }

    async fn settle(&mut self) {
        if let Some(result) = self.runner.next().await {
            self.finish(result);
        }
    }
}
