use async_trait::async_trait;
use yatter_core::{Password, ServiceError, Session, Username, Yweet};

#[async_trait]
pub trait LoginService: Send + Sync + 'static {
    async fn login(&self, username: &Username, password: &Password)
        -> Result<Session, ServiceError>;
}

#[async_trait]
pub trait YweetRepository: Send + Sync + 'static {
    async fn find_all_public_timelines(&self) -> Result<Vec<Yweet>, ServiceError>;
}

#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn load(&self) -> Result<Option<Session>, ServiceError>;
    async fn save(&self, session: &Session) -> Result<(), ServiceError>;
    async fn clear(&self) -> Result<(), ServiceError>;
}
