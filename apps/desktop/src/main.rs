#![windows_subsystem = "windows"]

use anyhow::Context;
use setorial::domain::config::AppConfig;
use setorial::kernel::config::load_config;
use setorial_desktop::{App, DesktopApp, init_logger};

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig = load_config(None::<&str>).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg.logging)?;

    let platform = setorial::init(&cfg)?;
    let registration = platform.registration()?.clone();

    DesktopApp::new().launch(registration, App);

    Ok(())
}
