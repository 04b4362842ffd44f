use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use yatter_core::{
    LoginFailure, Password, PasswordIssue, ServiceErrorKind, Username, UsernameIssue,
};

use super::{LoginUseCase, LoginUseCaseResult};
use crate::ports::{LoginService, SessionStore};

pub struct LoginUseCaseImpl<L, S> {
    service: Arc<L>,
    sessions: Arc<S>,
}

impl<L, S> LoginUseCaseImpl<L, S>
where
    L: LoginService,
    S: SessionStore,
{
    pub fn new(service: Arc<L>, sessions: Arc<S>) -> Self {
        Self { service, sessions }
    }
}

fn check_credentials(username: &Username, password: &Password) -> Result<(), LoginFailure> {
    match username.validate() {
        Ok(()) => {}
        Err(UsernameIssue::Empty) => return Err(LoginFailure::EmptyUsername),
        Err(UsernameIssue::TooLong | UsernameIssue::InvalidCharacters) => {
            return Err(LoginFailure::InvalidUsername)
        }
    }
    match password.validate() {
        Ok(()) => Ok(()),
        Err(PasswordIssue::Empty) => Err(LoginFailure::EmptyPassword),
        Err(PasswordIssue::Blank | PasswordIssue::TooShort) => Err(LoginFailure::InvalidPassword),
    }
}

#[async_trait]
impl<L, S> LoginUseCase for LoginUseCaseImpl<L, S>
where
    L: LoginService,
    S: SessionStore,
{
    async fn execute(&self, username: Username, password: Password) -> LoginUseCaseResult {
        check_credentials(&username, &password)?;

        let session = self
            .service
            .login(&username, &password)
            .await
            .map_err(|e| {
                warn!(%username, "login request failed: {e}");
                match e.kind() {
                    ServiceErrorKind::Unauthorized => LoginFailure::InvalidCredentials,
                    ServiceErrorKind::Network | ServiceErrorKind::Codec => LoginFailure::Network,
                    ServiceErrorKind::Storage => LoginFailure::Storage,
                }
            })?;

        if let Err(e) = self.sessions.save(&session).await {
            warn!(%username, "failed to persist session: {e}");
            return Err(LoginFailure::Storage);
        }

        info!(%username, "logged in");
        Ok(session)
    }
}
