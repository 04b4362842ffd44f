pub mod app;
pub mod commands;
pub mod render;

pub use app::{App, Container};

use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Overrides the platform config directory for `session.json`.
    pub session_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(yatter_config::clamp_timeout_secs(self.timeout_secs))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: yatter_config::DEFAULT_BASE_URL.to_string(),
            timeout_secs: yatter_config::DEFAULT_HTTP_TIMEOUT_SECS,
            session_dir: None,
        }
    }
}
