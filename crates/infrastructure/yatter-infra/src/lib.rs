pub mod net;
pub mod session;

// Re-exports for convenience
pub use net::{default_http_client, HttpLoginService, HttpYweetRepository};
pub use session::FileSessionStore;
