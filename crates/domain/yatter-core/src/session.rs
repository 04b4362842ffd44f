use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::Username;

/// Proof of a completed login, persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: Username,
    #[serde(default)]
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: Username, token: Option<String>) -> Self {
        Self {
            username,
            token,
            created_at: Utc::now(),
        }
    }
}
