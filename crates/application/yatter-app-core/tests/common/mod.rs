//! Test doubles for the application ports.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use yatter_app_core::{
    GetPublicTimelineUseCaseImpl, LoginHolder, LoginService, LoginUseCaseImpl,
    PublicTimelineHolder, SessionStore, YweetRepository,
};
use yatter_core::{Image, Password, ServiceError, Session, User, Username, Yweet};

pub type TestLoginHolder = LoginHolder<LoginUseCaseImpl<FakeLoginService, MemorySessionStore>>;
pub type TestTimelineHolder = PublicTimelineHolder<GetPublicTimelineUseCaseImpl<FakeYweetRepository>>;

/// Holds a fake collaborator until the test lets it through.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    pub fn open() -> Self {
        Self(Arc::new(Semaphore::new(Semaphore::MAX_PERMITS)))
    }

    pub fn closed() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    pub fn release(&self) {
        self.0.add_permits(1);
    }

    pub async fn pass(&self) {
        self.0.acquire().await.unwrap().forget();
    }
}

pub struct FakeLoginService {
    accounts: HashMap<String, String>,
    offline: bool,
    pub gate: Gate,
    calls: AtomicUsize,
}

impl FakeLoginService {
    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            accounts: HashMap::from([(username.to_string(), password.to_string())]),
            offline: false,
            gate: Gate::open(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::accepting("alice", "correct-pass")
        }
    }

    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginService for FakeLoginService {
    async fn login(&self, username: &Username, password: &Password) -> Result<Session, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.pass().await;
        if self.offline {
            return Err(ServiceError::Transport("connection refused".into()));
        }
        match self.accounts.get(username.as_str()) {
            Some(expected) if expected == password.expose() => {
                Ok(Session::new(username.clone(), Some("token".into())))
            }
            _ => Err(ServiceError::Unauthorized("bad credentials".into())),
        }
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
    broken: bool,
}

impl MemorySessionStore {
    pub fn with_session(username: &str) -> Self {
        Self {
            session: Mutex::new(Some(Session::new(Username::new(username), None))),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            session: Mutex::new(None),
            broken: true,
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, ServiceError> {
        if self.broken {
            return Err(ServiceError::Serde("garbage".into()));
        }
        Ok(self.current())
    }

    async fn save(&self, session: &Session) -> Result<(), ServiceError> {
        if self.broken {
            return Err(ServiceError::Io(std::io::Error::other("read-only")));
        }
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

pub struct FakeYweetRepository {
    yweets: Mutex<Vec<Yweet>>,
    fail_with: Mutex<Option<fn() -> ServiceError>>,
    pub gate: Gate,
    calls: AtomicUsize,
}

impl FakeYweetRepository {
    pub fn with(yweets: Vec<Yweet>) -> Self {
        Self {
            yweets: Mutex::new(yweets),
            fail_with: Mutex::new(None),
            gate: Gate::open(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn fail_with(&self, make: fn() -> ServiceError) {
        *self.fail_with.lock().unwrap() = Some(make);
    }

    pub fn set_yweets(&self, yweets: Vec<Yweet>) {
        *self.fail_with.lock().unwrap() = None;
        *self.yweets.lock().unwrap() = yweets;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl YweetRepository for FakeYweetRepository {
    async fn find_all_public_timelines(&self) -> Result<Vec<Yweet>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.pass().await;
        let fail = *self.fail_with.lock().unwrap();
        if let Some(make) = fail {
            return Err(make());
        }
        Ok(self.yweets.lock().unwrap().clone())
    }
}

pub fn login_holder(
    service: &Arc<FakeLoginService>,
    store: &Arc<MemorySessionStore>,
) -> TestLoginHolder {
    LoginHolder::new(Arc::new(LoginUseCaseImpl::new(
        service.clone(),
        store.clone(),
    )))
}

pub fn timeline_holder(repo: &Arc<FakeYweetRepository>) -> TestTimelineHolder {
    PublicTimelineHolder::new(Arc::new(GetPublicTimelineUseCaseImpl::new(repo.clone())))
}

pub fn yweet(id: &str, username: &str, content: &str) -> Yweet {
    Yweet {
        id: id.to_string(),
        user: User {
            username: Username::new(username),
            display_name: username.to_uppercase(),
            avatar: None,
        },
        content: content.to_string(),
        attachment_images: vec![Image {
            id: format!("{id}-img"),
            kind: "image".into(),
            url: format!("https://example.invalid/{id}.png"),
            description: None,
        }],
        created_at: None,
    }
}
