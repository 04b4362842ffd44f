use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use yatter_core::{Password, Username};

use super::events::{LoginEvent, LoginField};
use super::reducer::reduce;
use super::state::LoginUiState;
use crate::holder::{ScreenStateHolder, SubmissionPhase, UseCaseRunner};
use crate::navigation::{Destination, NavigationObserver, NavigationSlot, Route};
use crate::snapshot::{SnapshotPublisher, SnapshotStream};
use crate::usecase::{LoginUseCase, LoginUseCaseResult};

pub struct LoginHolder<U> {
    login: Arc<U>,
    state: SnapshotPublisher<LoginUiState>,
    destination: NavigationSlot,
    runner: UseCaseRunner<LoginUseCaseResult>,
}

impl<U: LoginUseCase> LoginHolder<U> {
    pub fn new(login: Arc<U>) -> Self {
        Self {
            login,
            state: SnapshotPublisher::new(),
            destination: NavigationSlot::new(),
            runner: UseCaseRunner::new(),
        }
    }

    pub fn ui_state(&self) -> LoginUiState {
        self.state.current()
    }

    pub fn on_field_changed(&mut self, field: LoginField, raw: &str) {
        self.apply(LoginEvent::FieldChanged {
            field,
            raw: raw.to_string(),
        });
    }

    pub fn on_changed_username(&mut self, username: &str) {
        self.on_field_changed(LoginField::Username, username);
    }

    pub fn on_changed_password(&mut self, password: &str) {
        self.on_field_changed(LoginField::Password, password);
    }

    /// Submits the current form. Ignored while a login is already running.
    pub fn on_click_login(&mut self) {
        let snapshot = self.state.current();
        if snapshot.is_loading || self.runner.is_busy() {
            debug!("login already in flight, ignoring submit");
            return;
        }

        let username = Username::new(snapshot.login_binding_model.username);
        let password = Password::new(snapshot.login_binding_model.password);
        let login = self.login.clone();

        match self
            .runner
            .start(async move { login.execute(username, password).await })
        {
            Ok(run_id) => {
                debug!(%run_id, "login submitted");
                self.apply(LoginEvent::SubmitStarted);
            }
            Err(e) => error!("could not start login: {e}"),
        }
    }

    pub fn on_click_register(&mut self) {
        self.destination.set(Destination::new(Route::RegisterUser));
    }

    fn apply(&self, ev: LoginEvent) {
        self.state.update(|s| reduce(s.clone(), ev));
    }

    fn finish(&mut self, result: LoginUseCaseResult) {
        match &result {
            Ok(session) => {
                info!(username = %session.username, "login succeeded");
                self.destination.set(
                    Destination::new(Route::PublicTimeline).pop_up_to(Route::Login, true),
                );
            }
            Err(failure) => warn!(?failure, "login failed"),
        }
        self.apply(LoginEvent::SubmitFinished(result));
    }
}

#[async_trait]
impl<U: LoginUseCase> ScreenStateHolder for LoginHolder<U> {
    type Snapshot = LoginUiState;

    fn snapshot(&self) -> SnapshotStream<LoginUiState> {
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
