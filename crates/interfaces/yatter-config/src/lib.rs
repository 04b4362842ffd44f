//! Central configuration constants for the client's limits and defaults.

/// Default API endpoint when neither a flag nor `YATTER_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Minimum allowed HTTP request timeout in seconds.
pub const MIN_HTTP_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed HTTP request timeout in seconds.
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 120;

/// User agent sent with every request. Some image hosts reject unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Longest accepted username, in characters.
pub const USERNAME_MAX_LEN: usize = 30;

/// Shortest accepted password, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Capacity of each holder's use-case completion channel.
pub const OUTCOME_CHANNEL_CAPACITY: usize = 100;

/// File name of the persisted login session.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Convenience function to clamp a timeout value into allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_HTTP_TIMEOUT_SECS, MAX_HTTP_TIMEOUT_SECS)
}
