use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::CheckLoginUseCase;
use crate::ports::SessionStore;

pub struct CheckLoginUseCaseImpl<S> {
    sessions: Arc<S>,
}

impl<S: SessionStore> CheckLoginUseCaseImpl<S> {
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl<S: SessionStore> CheckLoginUseCase for CheckLoginUseCaseImpl<S> {
    async fn execute(&self) -> bool {
        match self.sessions.load().await {
            Ok(session) => session.is_some(),
            Err(e) => {
                warn!("could not read stored session, treating as logged out: {e}");
                false
            }
        }
    }
}
