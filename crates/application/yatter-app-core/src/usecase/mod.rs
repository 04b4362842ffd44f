//! Business operations driven by the screen holders.
//!
//! Each use case takes domain values, talks to its ports, and reports a
//! closed failure enum. Collaborator errors never escape as `ServiceError`.

mod check_login;
mod login;
mod timeline;

pub use check_login::CheckLoginUseCaseImpl;
pub use login::LoginUseCaseImpl;
pub use timeline::GetPublicTimelineUseCaseImpl;

use async_trait::async_trait;
use yatter_core::{LoginFailure, Password, Session, TimelineFailure, Username, Yweet};

pub type LoginUseCaseResult = Result<Session, LoginFailure>;
pub type TimelineUseCaseResult = Result<Vec<Yweet>, TimelineFailure>;

#[async_trait]
pub trait LoginUseCase: Send + Sync + 'static {
    async fn execute(&self, username: Username, password: Password) -> LoginUseCaseResult;
}

#[async_trait]
pub trait GetPublicTimelineUseCase: Send + Sync + 'static {
    async fn execute(&self) -> TimelineUseCaseResult;
}

#[async_trait]
pub trait CheckLoginUseCase: Send + Sync + 'static {
    /// True when a stored session exists.
    async fn execute(&self) -> bool;
}
