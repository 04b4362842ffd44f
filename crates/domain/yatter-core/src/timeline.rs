use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::Username;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: Username,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl User {
    /// Display name, or the username when none is set.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            self.username.as_str()
        } else {
            &self.display_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub kind: String,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yweet {
    pub id: String,
    pub user: User,
    pub content: String,
    pub attachment_images: Vec<Image>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_username() {
        let mut user = User {
            username: Username::new("mitohato14"),
            display_name: "mito".into(),
            avatar: None,
        };
        assert_eq!(user.label(), "mito");
        user.display_name = "  ".into();
        assert_eq!(user.label(), "mitohato14");
    }
}
