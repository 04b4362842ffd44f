use anyhow::{bail, Result};
use tracing::info;
use yatter_app_core::Route;

use crate::app::{App, Container};
use crate::render::{render_login, render_timeline};
use crate::CliConfig;

pub async fn cmd_login(config: &CliConfig, username: &str, password: &str) -> Result<()> {
    let mut app = App::start(Container::new(config)?).await?;

    if app.current() == Some(Route::Login) {
        let state = app.login(username, password).await?;
        print!("{}", render_login(&state));
        if let Some(failure) = state.login_failure {
            bail!("login failed: {failure}");
        }
        println!(":: Logged in as {username}");
    } else {
        info!("session already stored, skipping login");
        println!(":: Already logged in. Run `yatter logout` to switch accounts.");
    }

    let timeline = app.timeline().await?;
    print!("{}", render_timeline(&timeline));
    Ok(())
}

pub async fn cmd_timeline(config: &CliConfig) -> Result<()> {
    let mut app = App::start(Container::new(config)?).await?;
    let state = app.timeline().await?;
    print!("{}", render_timeline(&state));
    if let Some(failure) = state.fetch_failure {
        bail!("timeline unavailable: {failure}");
    }
    Ok(())
}

pub async fn cmd_logout(config: &CliConfig) -> Result<()> {
    Container::new(config)?.clear_session().await?;
    println!(":: Logged out.");
    Ok(())
}
