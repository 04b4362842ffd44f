use serde::{Deserialize, Serialize};

/// Why a login attempt did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LoginFailure {
    #[error("username is required")]
    EmptyUsername,
    #[error("password is required")]
    EmptyPassword,
    #[error("username is not acceptable")]
    InvalidUsername,
    #[error("password is not acceptable")]
    InvalidPassword,
    #[error("username or password is incorrect")]
    InvalidCredentials,
    #[error("could not reach the server")]
    Network,
    #[error("could not store the session")]
    Storage,
}

/// Why the public timeline could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TimelineFailure {
    #[error("not authorized to read the timeline")]
    Unauthorized,
    #[error("could not reach the server")]
    Network,
    #[error("the server sent an unreadable timeline")]
    Decode,
}
