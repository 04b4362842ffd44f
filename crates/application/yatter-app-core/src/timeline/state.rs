use yatter_core::{Image, TimelineFailure, Yweet};

use crate::snapshot::UiSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBindingModel {
    pub id: String,
    pub kind: String,
    pub url: String,
    pub description: Option<String>,
}

impl From<&Image> for ImageBindingModel {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id.clone(),
            kind: image.kind.clone(),
            url: image.url.clone(),
            description: image.description.clone(),
        }
    }
}

/// One timeline row, already shaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YweetBindingModel {
    pub id: String,
    pub display_name: String,
    pub username: String,
    pub avatar: Option<String>,
    pub content: String,
    pub attachment_image_list: Vec<ImageBindingModel>,
}

impl From<&Yweet> for YweetBindingModel {
    fn from(yweet: &Yweet) -> Self {
        Self {
            id: yweet.id.clone(),
            display_name: yweet.user.label().to_string(),
            username: yweet.user.username.to_string(),
            avatar: yweet.user.avatar.clone(),
            content: yweet.content.clone(),
            attachment_image_list: yweet
                .attachment_images
                .iter()
                .map(ImageBindingModel::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicTimelineUiState {
    pub yweet_list: Vec<YweetBindingModel>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub fetch_failure: Option<TimelineFailure>,
}

impl PublicTimelineUiState {
    pub fn is_fetching(&self) -> bool {
        self.is_loading || self.is_refreshing
    }
}

impl UiSnapshot for PublicTimelineUiState {}
