pub mod account;
pub mod error;
pub mod failure;
pub mod session;
pub mod timeline;

pub use account::{Password, PasswordIssue, Username, UsernameIssue};
pub use error::{ServiceError, ServiceErrorKind};
pub use failure::{LoginFailure, TimelineFailure};
pub use session::Session;
pub use timeline::{Image, User, Yweet};
