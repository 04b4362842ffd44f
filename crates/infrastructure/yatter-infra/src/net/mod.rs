mod auth;
mod dto;
mod timeline;

pub use auth::HttpLoginService;
pub use timeline::HttpYweetRepository;

use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use yatter_core::ServiceError;

/// Builds the client shared by every HTTP adapter.
pub fn default_http_client(timeout: Duration) -> Result<Client, ServiceError> {
    Client::builder()
        .user_agent(yatter_config::USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| ServiceError::Transport(format!("could not build http client: {e}")))
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub(crate) fn transport_error(e: reqwest::Error) -> ServiceError {
    if e.is_decode() {
        ServiceError::Decode(e.to_string())
    } else {
        ServiceError::Transport(e.to_string())
    }
}

/// Passes successful responses through and turns everything else into a
/// `ServiceError`. `rejected` lists the statuses that mean "not allowed".
pub(crate) async fn check_status(
    resp: Response,
    rejected: &[StatusCode],
) -> Result<Response, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    if rejected.contains(&status) {
        Err(ServiceError::Unauthorized(format!("{status}: {body}")))
    } else {
        Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
