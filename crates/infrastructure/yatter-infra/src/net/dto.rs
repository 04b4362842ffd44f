//! Wire shapes of the Yatter API. Kept apart from the domain models so a
//! server-side rename only touches this file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yatter_core::{Image, Session, User, Username, Yweet};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(dto: LoginResponse) -> Self {
        Session::new(Username::new(dto.username), dto.token)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct YweetDto {
    pub id: String,
    pub user: UserDto,
    pub content: String,
    #[serde(default)]
    pub attachment_images: Vec<ImageDto>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            username: Username::new(dto.username),
            display_name: dto.display_name.unwrap_or_default(),
            avatar: dto.avatar,
        }
    }
}

impl From<ImageDto> for Image {
    fn from(dto: ImageDto) -> Self {
        Image {
            id: dto.id,
            kind: dto.kind,
            url: dto.url,
            description: dto.description,
        }
    }
}

impl From<YweetDto> for Yweet {
    fn from(dto: YweetDto) -> Self {
        Yweet {
            id: dto.id,
            user: dto.user.into(),
            content: dto.content,
            attachment_images: dto.attachment_images.into_iter().map(Into::into).collect(),
            created_at: dto.created_at,
        }
    }
}
