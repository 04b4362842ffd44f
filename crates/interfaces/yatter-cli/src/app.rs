//! Composition root: wires the HTTP adapters into use cases and holders, and
//! drives screens through one navigation host for the lifetime of a command.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use yatter_app_core::{
    CheckLoginUseCaseImpl, GetPublicTimelineUseCaseImpl, LoginHolder, LoginUiState,
    LoginUseCaseImpl, MainHolder, NavGraph, NavHost, PublicTimelineHolder, PublicTimelineUiState,
    Route, ScopeRegistry, ScreenStateHolder, SessionStore,
};
use yatter_infra::{default_http_client, FileSessionStore, HttpLoginService, HttpYweetRepository};

use crate::CliConfig;

pub type LoginScreen = LoginHolder<LoginUseCaseImpl<HttpLoginService, FileSessionStore>>;
pub type TimelineScreen =
    PublicTimelineHolder<GetPublicTimelineUseCaseImpl<HttpYweetRepository>>;
pub type StartupScreen = MainHolder<CheckLoginUseCaseImpl<FileSessionStore>>;

/// Long-lived collaborators shared by every screen.
pub struct Container {
    login_service: Arc<HttpLoginService>,
    yweets: Arc<HttpYweetRepository>,
    sessions: Arc<FileSessionStore>,
}

impl Container {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let client = default_http_client(config.timeout()).context("Failed to build HTTP client")?;
        let sessions = match &config.session_dir {
            Some(dir) => FileSessionStore::with_dir(dir),
            None => FileSessionStore::new().context("Failed to locate session directory")?,
        };
        debug!(base_url = %config.base_url, session = %sessions.path().display(), "container ready");

        Ok(Self {
            login_service: Arc::new(HttpLoginService::new(client.clone(), &config.base_url)),
            yweets: Arc::new(HttpYweetRepository::new(client, &config.base_url)),
            sessions: Arc::new(sessions),
        })
    }

    pub fn startup_screen(&self) -> StartupScreen {
        MainHolder::new(Arc::new(CheckLoginUseCaseImpl::new(self.sessions.clone())))
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginHolder::new(Arc::new(LoginUseCaseImpl::new(
            self.login_service.clone(),
            self.sessions.clone(),
        )))
    }

    pub fn timeline_screen(&self) -> TimelineScreen {
        PublicTimelineHolder::new(Arc::new(GetPublicTimelineUseCaseImpl::new(
            self.yweets.clone(),
        )))
    }

    pub async fn clear_session(&self) -> Result<()> {
        self.sessions
            .clear()
            .await
            .context("Failed to clear stored session")
    }
}

fn nav_graph() -> NavGraph {
    NavGraph::new()
        .route(Route::Login)
        .route(Route::PublicTimeline)
}

/// One running client: the navigation host plus the holders of the screens
/// it has shown.
pub struct App {
    container: Container,
    registry: ScopeRegistry,
    host: NavHost,
}

impl App {
    /// Checks the stored session and builds the host on the resolved start
    /// route.
    pub async fn start(container: Container) -> Result<Self> {
        let mut startup = container.startup_screen();
        let start = startup.resolve_start_destination().await?;
        let host = NavHost::new(nav_graph(), start)?;
        Ok(Self {
            container,
            registry: ScopeRegistry::new(),
            host,
        })
    }

    pub fn current(&self) -> Option<Route> {
        self.host.current()
    }

    pub fn back_stack(&self) -> &[Route] {
        self.host.back_stack()
    }

    /// Fills in the login form, submits it and follows the resulting
    /// navigation command. Returns the final login snapshot.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginUiState> {
        if self.current() != Some(Route::Login) {
            bail!("login screen is not showing");
        }

        let container = &self.container;
        let holder = self
            .registry
            .get_or_insert_with(Route::Login.as_str(), || container.login_screen())?;
        holder.on_changed_username(username);
        holder.on_changed_password(password);
        holder.on_click_login();
        with_spinner("Logging in...", holder.settle()).await;

        let state = holder.ui_state();
        if self.host.consume_from(holder)?.is_some()
            && !self.host.back_stack().contains(&Route::Login)
        {
            self.registry.remove(Route::Login.as_str());
        }
        Ok(state)
    }

    /// Shows the public timeline, fetching it on the first visit and
    /// refreshing it afterwards.
    pub async fn timeline(&mut self) -> Result<PublicTimelineUiState> {
        if self.current() != Some(Route::PublicTimeline) {
            bail!("not logged in; run `yatter login` first");
        }

        let container = &self.container;
        let scope = Route::PublicTimeline.as_str();
        let revisit = self.registry.contains(scope);
        let holder = self
            .registry
            .get_or_insert_with(scope, || container.timeline_screen())?;
        if revisit {
            holder.on_refresh();
        } else {
            holder.on_resume();
        }
        with_spinner("Loading timeline...", holder.settle()).await;
        Ok(holder.ui_state())
    }

    pub fn login_screen(&mut self) -> Option<&mut LoginScreen> {
        self.registry.get_mut(Route::Login.as_str())
    }
}

async fn with_spinner<F: Future>(msg: &'static str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}
