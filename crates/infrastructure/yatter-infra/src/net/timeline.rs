use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use yatter_app_core::YweetRepository;
use yatter_core::{ServiceError, Yweet};

use super::dto::YweetDto;
use super::{check_status, endpoint, transport_error};

const PUBLIC_TIMELINE_PATH: &str = "v1/timelines/public";

/// `YweetRepository` reading the public timeline over HTTP.
pub struct HttpYweetRepository {
    client: Client,
    base_url: String,
}

impl HttpYweetRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl YweetRepository for HttpYweetRepository {
    async fn find_all_public_timelines(&self) -> Result<Vec<Yweet>, ServiceError> {
        let url = endpoint(&self.base_url, PUBLIC_TIMELINE_PATH);
        debug!(%url, "GET public timeline");

        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        let resp = check_status(resp, &[StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN]).await?;

        let bytes = resp.bytes().await.map_err(transport_error)?;
        let dtos: Vec<YweetDto> = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Decode(format!("public timeline: {e}")))?;
        Ok(dtos.into_iter().map(Yweet::from).collect())
    }
}
