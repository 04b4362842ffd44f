/// Error raised by an I/O collaborator (HTTP service, session storage).
///
/// Use cases map these into their own failure enums; they never reach a
/// screen holder directly.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request was rejected: {0}")]
    Unauthorized(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Unauthorized,
    Network,
    Codec,
    Storage,
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            ServiceError::Unauthorized(_) => ServiceErrorKind::Unauthorized,
            ServiceError::Transport(_) | ServiceError::Status { .. } => ServiceErrorKind::Network,
            ServiceError::Decode(_) => ServiceErrorKind::Codec,
            ServiceError::Io(_) | ServiceError::Serde(_) => ServiceErrorKind::Storage,
        }
    }
}
