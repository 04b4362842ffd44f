//! Session persistence as a single JSON file.

use async_trait::async_trait;
use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use yatter_app_core::SessionStore;
use yatter_core::{ServiceError, Session};

const QUALIFIER: &str = "com";
const ORG: &str = "dmm";
const APP: &str = "yatter";

/// Stores the logged-in session as `session.json` inside `dir`.
///
/// Writes go through a temp file and a rename, so a crash never leaves a
/// half-written session behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Uses the platform config directory.
    pub fn new() -> Result<Self, ServiceError> {
        let proj_dirs = ProjectDirs::from(QUALIFIER, ORG, APP).ok_or_else(|| {
            ServiceError::Io(io::Error::other("could not determine config directory"))
        })?;
        Ok(Self::with_dir(proj_dirs.config_dir()))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(yatter_config::SESSION_FILE_NAME)
    }

    fn load_blocking(path: &Path) -> Result<Option<Session>, ServiceError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str(&content).map_err(|e| {
            warn!(path = %path.display(), "session file is unreadable: {e}");
            ServiceError::Serde(e.to_string())
        })?;
        Ok(Some(session))
    }

    fn save_blocking(path: &Path, session: &Session) -> Result<(), ServiceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(session).map_err(|e| ServiceError::Serde(e.to_string()))?;
        atomic_write(path, json.as_bytes())?;
        Ok(())
    }

    fn clear_blocking(path: &Path) -> Result<(), ServiceError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

async fn blocking<T, F>(f: F) -> Result<T, ServiceError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServiceError::Io(io::Error::other(e)))?
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, ServiceError> {
        let path = self.path();
        blocking(move || Self::load_blocking(&path)).await
    }

    async fn save(&self, session: &Session) -> Result<(), ServiceError> {
        let path = self.path();
        let session = session.clone();
        debug!(path = %path.display(), username = %session.username, "saving session");
        blocking(move || Self::save_blocking(&path, &session)).await
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let path = self.path();
        debug!(path = %path.display(), "clearing session");
        blocking(move || Self::clear_blocking(&path)).await
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)?;
        }
        Err(e) => {
            fs::remove_file(&tmp_path).ok();
            return Err(e);
        }
    }

    if let Some(parent) = path.parent() {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }
    Ok(())
}
