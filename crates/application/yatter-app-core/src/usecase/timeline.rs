use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use yatter_core::{ServiceErrorKind, TimelineFailure};

use super::{GetPublicTimelineUseCase, TimelineUseCaseResult};
use crate::ports::YweetRepository;

pub struct GetPublicTimelineUseCaseImpl<R> {
    repository: Arc<R>,
}

impl<R: YweetRepository> GetPublicTimelineUseCaseImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: YweetRepository> GetPublicTimelineUseCase for GetPublicTimelineUseCaseImpl<R> {
    async fn execute(&self) -> TimelineUseCaseResult {
        self.repository
            .find_all_public_timelines()
            .await
            .map_err(|e| {
                warn!("public timeline fetch failed: {e}");
                match e.kind() {
                    ServiceErrorKind::Unauthorized => TimelineFailure::Unauthorized,
                    ServiceErrorKind::Codec => TimelineFailure::Decode,
                    ServiceErrorKind::Network | ServiceErrorKind::Storage => {
                        TimelineFailure::Network
                    }
                }
            })
    }
}
