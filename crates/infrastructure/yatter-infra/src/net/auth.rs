use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use yatter_app_core::LoginService;
use yatter_core::{Password, ServiceError, Session, Username};

use super::dto::{LoginRequest, LoginResponse};
use super::{check_status, endpoint, transport_error};

const LOGIN_PATH: &str = "v1/auth/login";
const REJECTED: &[StatusCode] = &[
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
];

/// `LoginService` backed by the Yatter HTTP API.
pub struct HttpLoginService {
    client: Client,
    base_url: String,
}

impl HttpLoginService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl LoginService for HttpLoginService {
    async fn login(&self, username: &Username, password: &Password) -> Result<Session, ServiceError> {
        let url = endpoint(&self.base_url, LOGIN_PATH);
        debug!(%url, %username, "POST login");

        let resp = self
            .client
            .post(&url)
            .json(&LoginRequest {
                username: username.as_str(),
                password: password.expose(),
            })
            .send()
            .await
            .map_err(transport_error)?;
        let resp = check_status(resp, REJECTED).await?;

        let bytes = resp.bytes().await.map_err(transport_error)?;
        let dto: LoginResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Decode(format!("login response: {e}")))?;
        Ok(dto.into())
    }
}
