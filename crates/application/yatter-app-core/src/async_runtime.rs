use anyhow::Result;
use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Handle;

static RUNTIME: OnceLock<std::result::Result<tokio::runtime::Runtime, String>> = OnceLock::new();

pub(crate) fn runtime() -> Result<&'static tokio::runtime::Runtime> {
    match RUNTIME.get_or_init(|| tokio::runtime::Runtime::new().map_err(|e| e.to_string())) {
        Ok(rt) => Ok(rt),
        Err(message) => Err(anyhow::anyhow!(message.clone())),
    }
}

/// Spawns onto the ambient runtime, or the shared worker runtime when the
/// caller is a plain thread.
pub(crate) fn spawn<F>(fut: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(_) => runtime()?.handle().clone(),
    };
    handle.spawn(fut);
    Ok(())
}
