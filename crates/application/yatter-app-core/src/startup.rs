//! Resolves the first route before any navigation host exists.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::holder::UseCaseRunner;
use crate::navigation::Route;
use crate::snapshot::{SnapshotPublisher, SnapshotStream, UiSnapshot};
use crate::usecase::CheckLoginUseCase;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainUiState {
    pub is_loading: bool,
    /// `None` until the stored session has been checked.
    pub start_destination: Option<Route>,
}

impl UiSnapshot for MainUiState {}

pub struct MainHolder<U> {
    check_login: Arc<U>,
    state: SnapshotPublisher<MainUiState>,
    runner: UseCaseRunner<bool>,
}

impl<U: CheckLoginUseCase> MainHolder<U> {
    pub fn new(check_login: Arc<U>) -> Self {
        Self {
            check_login,
            state: SnapshotPublisher::new(),
            runner: UseCaseRunner::new(),
        }
    }

    pub fn snapshot(&self) -> SnapshotStream<MainUiState> {
        self.state.subscribe()
    }

    pub fn ui_state(&self) -> MainUiState {
        self.state.current()
    }

    /// Starts the session check. Does nothing once resolved or while running.
    pub fn on_create(&mut self) -> Result<()> {
        if self.state.current().start_destination.is_some() || self.runner.is_busy() {
            return Ok(());
        }
        let check_login = self.check_login.clone();
        self.runner
            .start(async move { check_login.execute().await })
            .map_err(|e| anyhow!("could not start session check: {e}"))?;
        self.state.update(|s| MainUiState {
            is_loading: true,
            ..s.clone()
        });
        Ok(())
    }

    /// Runs the check if needed and waits for its answer.
    pub async fn resolve_start_destination(&mut self) -> Result<Route> {
        self.on_create()?;
        if let Some(logged_in) = self.runner.next().await {
            self.finish(logged_in);
        }
        self.state
            .current()
            .start_destination
            .ok_or_else(|| anyhow!("start destination was not resolved"))
    }

    fn finish(&mut self, logged_in: bool) {
        let start = if logged_in {
            Route::PublicTimeline
        } else {
            Route::Login
        };
        debug!(logged_in, "session check finished");
        info!(start = %start, "start destination resolved");
        self.state.update(|_| MainUiState {
            is_loading: false,
            start_destination: Some(start),
        });
    }
}
